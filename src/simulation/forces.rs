//! Pairwise Newtonian gravity for the fixed body set
//!
//! No softening and no acceleration buffer: each pair writes straight into
//! the two bodies' velocities, in `PAIRS` order, so a later pair sees the
//! velocities already kicked by the earlier ones.

use crate::simulation::pairs::PAIRS;
use crate::simulation::states::{NVec3, System};

/// Squared length, summed x then y then z
#[inline]
pub(crate) fn norm2(d: &NVec3) -> f64 {
    d.x * d.x + d.y * d.y + d.z * d.z
}

/// Apply one velocity kick of length `dt` to every body from every pair
///
/// Coincident bodies make `r2` zero and the kick infinite; that is left to
/// propagate rather than guarded.
pub fn gravity_kick(sys: &mut System, dt: f64) {
    for &(i, j) in PAIRS.iter() {
        // d points from body j to body i
        let d = sys.bodies[i].x - sys.bodies[j].x;
        let r2 = norm2(&d);

        // dt / |d|^3, G = 1 in these units
        let mag = dt * r2.powf(-1.5);

        let mi_mag = sys.bodies[i].m * mag;
        let mj_mag = sys.bodies[j].m * mag;

        // i is pulled toward j (along -d), j toward i (along +d)
        sys.bodies[i].v -= d * mj_mag;
        sys.bodies[j].v += d * mi_mag;
    }
}
