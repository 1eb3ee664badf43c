//! The energy report: offset momentum, print energy, advance, print energy.

use std::io::Write;

use log::{debug, info};

use crate::error::SimError;
use crate::simulation::bodies::BODY_NAMES;
use crate::simulation::energy::{kinetic_energy, potential_energy};
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;

/// Energy line as printed: fixed point, 9 fractional digits
pub fn format_energy(e: f64) -> String {
    format!("{:.9}", e)
}

/// Energies measured around the advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub before: f64,
    pub after: f64,
}

impl EnergyReport {
    /// Relative change |after - before| / |before|
    pub fn relative_drift(&self) -> f64 {
        ((self.after - self.before) / self.before).abs()
    }
}

/// Run the full sequence on `sim` and write the two energy lines to `out`
pub fn run_report<W: Write>(
    sim: &mut Simulator,
    params: &Parameters,
    steps: u64,
    out: &mut W,
) -> Result<EnergyReport, SimError> {
    sim.offset_momentum(params.reference)?;

    let before = sim.energy();
    debug!(
        "kinetic = {:.12}, potential = {:.12}",
        kinetic_energy(sim.system()),
        potential_energy(sim.system())
    );
    writeln!(out, "{}", format_energy(before))?;

    info!(
        "advancing {} steps of dt = {} (reference body: {})",
        steps, params.dt, BODY_NAMES[params.reference]
    );
    sim.advance(params.dt, steps);

    let after = sim.energy();
    writeln!(out, "{}", format_energy(after))?;

    let report = EnergyReport { before, after };
    debug!(
        "t = {}, relative energy drift = {:e}",
        sim.system().t,
        report.relative_drift()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_fractional_digits() {
        assert_eq!(format_energy(-0.1690751638285245), "-0.169075164");
        assert_eq!(format_energy(0.0), "0.000000000");
        assert_eq!(format_energy(1.5), "1.500000000");
    }

    #[test]
    fn report_writes_exactly_two_lines() {
        let mut sim = Simulator::jovian();
        let mut out = Vec::new();
        run_report(&mut sim, &Parameters::default(), 0, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "-0.169075164\n-0.169075164\n");
    }
}
