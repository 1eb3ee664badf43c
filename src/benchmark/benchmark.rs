use std::io::Write;
use std::time::Instant;

use crate::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;

/// Step counts to time: 1, 2, 4, ... up to and including `max_steps`
pub fn step_counts(max_steps: u64) -> Vec<u64> {
    let mut counts = Vec::new();
    let mut n = 1;
    while n < max_steps {
        counts.push(n);
        n = match n.checked_mul(2) {
            Some(next) => next,
            None => break,
        };
    }
    if max_steps > 0 {
        counts.push(max_steps);
    }
    counts
}

/// Time `advance` from a fresh, momentum-offset system for a range of step counts
/// Writes CSV `steps,ms_total,ns_per_step`; paste into a spreadsheet to graph
pub fn bench_advance_curve<W: Write>(params: &Parameters, max_steps: u64, out: &mut W) -> Result<(), SimError> {
    writeln!(out, "steps,ms_total,ns_per_step")?;

    let mut template = Simulator::jovian();
    template.offset_momentum(params.reference)?;

    // Warm-up
    template.clone().advance(params.dt, max_steps.min(1000));

    for steps in step_counts(max_steps) {
        let mut sim = template.clone();

        let t0 = Instant::now();
        sim.advance(params.dt, steps);
        let elapsed = t0.elapsed();

        std::hint::black_box(sim.energy());

        let ms = elapsed.as_secs_f64() * 1000.0;
        let ns_per_step = elapsed.as_nanos() as f64 / steps as f64;
        writeln!(out, "{},{:.6},{:.3}", steps, ms, ns_per_step)?;
    }
    Ok(())
}
