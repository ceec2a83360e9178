pub mod simulation;

pub use simulation::{CoolingSimulation, SimProps};
