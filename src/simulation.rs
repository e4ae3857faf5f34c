pub mod four_point;

pub use four_point::{run, run_in_triangle, SimulationConfig, ANALYTICAL_PROBABILITY};
