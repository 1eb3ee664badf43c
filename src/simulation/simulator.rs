//! The simulator: one owned `System` plus the operations run on it
//!
//! Typical use is initialize → measure → advance(n) → measure:
//!
//! ```
//! use jovian_nbody::Simulator;
//!
//! let mut sim = Simulator::jovian();
//! sim.offset_momentum(0).unwrap();
//! let before = sim.energy();
//! sim.advance(0.01, 10);
//! let after = sim.energy();
//! assert!((before - after).abs() < 1e-5);
//! ```

use log::debug;

use crate::error::SimError;
use crate::simulation::bodies::{jovian_system, BODY_NAMES};
use crate::simulation::energy::{total_energy, total_momentum};
use crate::simulation::integrator;
use crate::simulation::states::System;

/// Owns the system state exclusively; nothing else can mutate it
#[derive(Debug, Clone, PartialEq)]
pub struct Simulator {
    system: System,
}

impl Simulator {
    /// Wrap an existing system
    pub fn new(system: System) -> Self {
        Self { system }
    }

    /// Sun and gas giants at t = 0, momentum not yet offset
    pub fn jovian() -> Self {
        Self::new(jovian_system())
    }

    /// Read-only view of the current state
    pub fn system(&self) -> &System {
        &self.system
    }

    /// Absorb the system's momentum into the reference body's velocity
    ///
    /// p = sum of m_i v_i over all bodies (the reference included), then
    /// v_ref = -p / m_ref. The total momentum afterwards is -m_ref * v_ref_old,
    /// so it is zero only when the reference body starts at rest (the sun).
    pub fn offset_momentum(&mut self, reference: usize) -> Result<(), SimError> {
        if reference >= self.system.bodies.len() {
            return Err(SimError::ReferenceOutOfRange(reference));
        }

        let p = total_momentum(&self.system);
        let body = &mut self.system.bodies[reference];
        body.v = -p / body.m;

        debug!(
            "offset momentum onto {}: p = ({:e}, {:e}, {:e})",
            BODY_NAMES[reference], p.x, p.y, p.z
        );
        Ok(())
    }

    /// Total mechanical energy of the current state
    pub fn energy(&self) -> f64 {
        total_energy(&self.system)
    }

    /// Integrate `steps` steps of size `dt`
    pub fn advance(&mut self, dt: f64, steps: u64) {
        integrator::advance(&mut self.system, dt, steps);
    }
}
