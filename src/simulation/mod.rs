pub mod states;
pub mod bodies;
pub mod pairs;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod energy;
pub mod simulator;
