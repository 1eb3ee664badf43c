//! Fixed-step time integration for the system
//!
//! Semi-implicit (symplectic) Euler: kick every velocity from the pairwise
//! forces, then drift every position with the kicked velocities.

use super::forces::gravity_kick;
use super::states::System;

/// Advance the system by one step of size `dt`
/// Updates velocities, positions, and `sys.t` in place
pub fn symplectic_euler(sys: &mut System, dt: f64) {
    // Kick: v_n+1 = v_n + dt * a(x_n)
    gravity_kick(sys, dt);

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;
}

/// Advance the system by `steps` steps of size `dt`
/// `steps == 0` leaves the system untouched
pub fn advance(sys: &mut System, dt: f64, steps: u64) {
    for _ in 0..steps {
        symplectic_euler(sys, dt);
    }
}
