pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;
pub mod report;

pub use simulation::states::{Body, System, NVec3, N_BODIES};
pub use simulation::bodies::{jovian_system, body_index, BODY_NAMES, SOLAR_MASS, DAYS_PER_YEAR, SUN};
pub use simulation::pairs::{PAIRS, N_PAIRS};
pub use simulation::params::{Parameters, DEFAULT_DT};
pub use simulation::energy::{total_energy, kinetic_energy, potential_energy, total_momentum};
pub use simulation::integrator::{advance, symplectic_euler};
pub use simulation::simulator::Simulator;

pub use configuration::config::{SimulationConfig, ParametersConfig};

pub use error::SimError;
pub use report::{format_energy, run_report, EnergyReport};

pub use benchmark::benchmark::bench_advance_curve;
