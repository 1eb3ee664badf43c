//! Initial conditions for the sun and the four gas giants.
//!
//! Masses are expressed in solar masses scaled by `SOLAR_MASS = 4π²` and the
//! raw velocities are per-day values scaled by `DAYS_PER_YEAR`, so that the
//! gravitational constant is 1 in simulation units.

use std::f64::consts::PI;

use crate::error::SimError;
use crate::simulation::states::{Body, NVec3, System, N_BODIES};

pub const SOLAR_MASS: f64 = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: f64 = 365.24;

/// Body names, in index order
pub const BODY_NAMES: [&str; N_BODIES] = ["sun", "jupiter", "saturn", "uranus", "neptune"];

/// Index of the sun, the default momentum reference
pub const SUN: usize = 0;

/// Raw table: [x, y, z, vx, vy, vz, m] before unit scaling of v and m
const RAW: [[f64; 7]; N_BODIES] = [
    // sun
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
    // jupiter
    [
        4.84143144246472090e+00,
        -1.16032004402742839e+00,
        -1.03622044471123109e-01,
        1.66007664274403694e-03,
        7.69901118419740425e-03,
        -6.90460016972063023e-05,
        9.54791938424326609e-04,
    ],
    // saturn
    [
        8.34336671824457987e+00,
        4.12479856412430479e+00,
        -4.03523417114321381e-01,
        -2.76742510726862411e-03,
        4.99852801234917238e-03,
        2.30417297573763929e-05,
        2.85885980666130812e-04,
    ],
    // uranus
    [
        1.28943695621391310e+01,
        -1.51111514016986312e+01,
        -2.23307578892655734e-01,
        2.96460137564761618e-03,
        2.37847173959480950e-03,
        -2.96589568540237556e-05,
        4.36624404335156298e-05,
    ],
    // neptune
    [
        1.53796971148509165e+01,
        -2.59193146099879641e+01,
        1.79258772950371181e-01,
        2.68067772490389322e-03,
        1.62824170038242295e-03,
        -9.51592254519715870e-05,
        5.15138902046611451e-05,
    ],
];

/// Build the system at t = 0, before any momentum correction
pub fn jovian_system() -> System {
    let bodies = RAW.map(|r| Body {
        x: NVec3::new(r[0], r[1], r[2]),
        v: NVec3::new(r[3] * DAYS_PER_YEAR, r[4] * DAYS_PER_YEAR, r[5] * DAYS_PER_YEAR),
        m: r[6] * SOLAR_MASS,
    });

    System { bodies, t: 0.0 }
}

/// Look up a body index by name (case-insensitive)
pub fn body_index(name: &str) -> Result<usize, SimError> {
    BODY_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| SimError::UnknownBody(name.to_string()))
}
