use crate::models::pendulum::PendulumProperties;
use crate::models::State;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, t: f64, state: &Self::State) -> Self::State;
}

/// Coupled equations of motion of a planar double pendulum with point masses.
pub struct DoublePendulumDynamics<'a, P: PendulumProperties> {
    pendulum: &'a P,
}

impl<'a, P: PendulumProperties> DoublePendulumDynamics<'a, P> {
    pub fn new(pendulum: &'a P) -> Self {
        Self { pendulum }
    }
}

impl<P: PendulumProperties> EquationsOfMotion for DoublePendulumDynamics<'_, P> {
    type State = State;

    // Time independent. Near-singular denominators are not guarded.
    fn compute_derivative(&self, _t: f64, state: &State) -> State {
        let g = self.pendulum.gravity();
        let l1 = self.pendulum.length1();
        let l2 = self.pendulum.length2();
        let m2 = self.pendulum.mass2();
        let m = self.pendulum.total_mass();

        let (th1, w1, th2, w2) = (state.theta1(), state.omega1(), state.theta2(), state.omega2());

        let delta = th2 - th1;
        let (sin_d, cos_d) = delta.sin_cos();

        let den1 = m * l1 - m2 * l1 * cos_d * cos_d;
        let alpha1 = (m2 * l1 * w1 * w1 * sin_d * cos_d
            + m2 * g * th2.sin() * cos_d
            + m2 * l2 * w2 * w2 * sin_d
            - m * g * th1.sin())
            / den1;

        let den2 = (l2 / l1) * den1;
        let alpha2 = (-m2 * l2 * w2 * w2 * sin_d * cos_d
            + m * g * th1.sin() * cos_d
            - m * l1 * w1 * w1 * sin_d
            - m * g * th2.sin())
            / den2;

        State::new(w1, alpha1, w2, alpha2)
    }
}
