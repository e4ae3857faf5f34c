pub mod error;
pub mod geometry;
pub mod simulation;

pub use error::{Error, Result};
pub use geometry::{classify_four, orientation, sample_in_triangle, Point, Triangle};
pub use simulation::{run, run_in_triangle, SimulationConfig, ANALYTICAL_PROBABILITY};
