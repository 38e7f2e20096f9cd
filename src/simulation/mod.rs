pub mod ensemble;
pub mod trajectory;

pub use trajectory::{propagate, InitialConditions, SimulationConfig, Trajectory, TrajectoryPoint};
