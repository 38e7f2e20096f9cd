use crate::models::pendulum::PendulumProperties;
use crate::models::state::State;

pub fn calculate_kinetic_energy<P: PendulumProperties>(pendulum: &P, state: &State) -> f64 {
    let l1 = pendulum.length1();
    let l2 = pendulum.length2();
    let w1 = state.omega1();
    let w2 = state.omega2();

    0.5 * pendulum.total_mass() * l1 * l1 * w1 * w1
        + 0.5 * pendulum.mass2() * l2 * l2 * w2 * w2
        + pendulum.mass2() * l1 * l2 * w1 * w2 * (state.theta1() - state.theta2()).cos()
}

/// Potential energy with the pivot as reference height.
pub fn calculate_potential_energy<P: PendulumProperties>(pendulum: &P, state: &State) -> f64 {
    let g = pendulum.gravity();

    -pendulum.total_mass() * g * pendulum.length1() * state.theta1().cos()
        - pendulum.mass2() * g * pendulum.length2() * state.theta2().cos()
}

pub fn calculate_energy<P: PendulumProperties>(pendulum: &P, state: &State) -> f64 {
    calculate_kinetic_energy(pendulum, state) + calculate_potential_energy(pendulum, state)
}
