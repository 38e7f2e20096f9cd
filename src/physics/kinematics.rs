use crate::models::pendulum::PendulumProperties;
use crate::models::State;
use nalgebra as na;

/// Cartesian positions of the two bobs with the pivot at the origin and +y up.
/// Angles are measured from the downward vertical.
pub fn bob_positions<P: PendulumProperties>(
    pendulum: &P,
    state: &State,
) -> (na::Vector2<f64>, na::Vector2<f64>) {
    let (sin1, cos1) = state.theta1().sin_cos();
    let (sin2, cos2) = state.theta2().sin_cos();

    let upper = na::Vector2::new(sin1, -cos1) * pendulum.length1();
    let lower = upper + na::Vector2::new(sin2, -cos2) * pendulum.length2();

    (upper, lower)
}
