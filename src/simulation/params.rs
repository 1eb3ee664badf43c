//! Numerical parameters for a run
//!
//! `Parameters` holds the validated runtime settings:
//! - integration step size `dt`,
//! - index of the body that absorbs the momentum offset

use crate::error::SimError;
use crate::simulation::bodies::SUN;
use crate::simulation::states::N_BODIES;

/// Step size used by the reference benchmark
pub const DEFAULT_DT: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub reference: usize, // momentum reference body index
}

impl Parameters {
    /// Validate and build
    pub fn new(dt: f64, reference: usize) -> Result<Self, SimError> {
        if !dt.is_finite() || dt == 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }
        if reference >= N_BODIES {
            return Err(SimError::ReferenceOutOfRange(reference));
        }
        Ok(Self { dt, reference })
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            reference: SUN,
        }
    }
}
