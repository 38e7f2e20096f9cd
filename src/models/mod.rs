pub mod pendulum;
pub mod state;

pub use pendulum::PendulumProperties;
pub use state::State;
