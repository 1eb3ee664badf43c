//! Core state types for the simulation.
//!
//! - `Body`   one point mass (position, velocity, mass) using `NVec3`
//! - `System` the fixed array of `N_BODIES` bodies plus the elapsed time `t`
//!
//! Body identity is the index into `System::bodies`; nothing ever inserts or
//! removes a body after construction.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Number of bodies in the system: the sun and the four gas giants
pub const N_BODIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec3, // position (AU)
    pub v: NVec3, // velocity (AU per year)
    pub m: f64, // mass (solar mass units)
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: [Body; N_BODIES], // fixed, ordered collection of bodies
    pub t: f64, // elapsed simulation time
}
