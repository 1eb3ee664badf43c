//! Conserved quantities: total energy and total momentum
//!
//! `total_energy` is the value that gets reported. Its summation order is
//! fixed (all pairs in `PAIRS` order into one accumulator, then every body in
//! index order into the same accumulator), so the printed digits are
//! reproducible. `kinetic_energy` and `potential_energy` are for diagnostics
//! and need not add up bit-for-bit to `total_energy`.

use crate::simulation::forces::norm2;
use crate::simulation::pairs::PAIRS;
use crate::simulation::states::{NVec3, System};

/// Potential plus kinetic energy, G = 1
pub fn total_energy(sys: &System) -> f64 {
    let mut e = 0.0;

    for &(i, j) in PAIRS.iter() {
        let bi = &sys.bodies[i];
        let bj = &sys.bodies[j];
        let d = bi.x - bj.x;
        e -= (bi.m * bj.m) / norm2(&d).sqrt();
    }

    for b in sys.bodies.iter() {
        e += b.m * norm2(&b.v) / 2.0;
    }

    e
}

/// Sum of -m_i m_j / r_ij over all pairs
pub fn potential_energy(sys: &System) -> f64 {
    PAIRS.iter().fold(0.0, |e, &(i, j)| {
        let bi = &sys.bodies[i];
        let bj = &sys.bodies[j];
        e - (bi.m * bj.m) / norm2(&(bi.x - bj.x)).sqrt()
    })
}

/// Sum of m v^2 / 2 over all bodies
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().fold(0.0, |e, b| e + b.m * norm2(&b.v) / 2.0)
}

/// Vector sum of m_i v_i, in body index order
pub fn total_momentum(sys: &System) -> NVec3 {
    let mut p = NVec3::zeros();
    for b in sys.bodies.iter() {
        p += b.v * b.m;
    }
    p
}
