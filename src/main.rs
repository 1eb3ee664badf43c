use jovian_nbody::{bench_advance_curve, run_report, SimulationConfig, Simulator};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use std::io::{self, Write};
use std::path::PathBuf;

/// Simulate the sun and the four gas giants and report the total energy
/// before and after `steps` integration steps.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of integration steps
    steps: u64,

    /// YAML file with run parameters (step size, reference body)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Body whose velocity is set to -p / m before the run (zero net momentum
    /// only for a body at rest, e.g. the sun); overrides the config
    #[arg(short, long)]
    reference: Option<String>,

    /// Print a timing curve for up to `steps` steps instead of the energy report
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut cfg = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(name) = &args.reference {
        cfg.parameters.reference = name.clone();
    }

    debug!("{:?}", cfg);
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let cfg = load_config(&args)?;
    let params = cfg.to_parameters().context("invalid run parameters")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.bench {
        bench_advance_curve(&params, args.steps, &mut out)?;
    } else {
        let mut sim = Simulator::jovian();
        run_report(&mut sim, &params, args.steps, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
