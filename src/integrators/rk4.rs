use crate::physics::dynamics::EquationsOfMotion;

/// Classical fixed-step fourth order Runge-Kutta.
pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T>
where
    T::State: Copy
        + std::ops::Add<Output = T::State>
        + std::ops::Mul<f64, Output = T::State>
        + std::ops::Div<f64, Output = T::State>,
{
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }

    pub fn eom(&self) -> &T {
        &self.eom
    }

    /// Advances `state` from `t` to `t + dt`. Four derivative evaluations, no error control.
    pub fn integrate(&self, t: f64, state: &T::State, dt: f64) -> T::State {
        let y = *state;
        let half = 0.5 * dt;

        let k1 = self.eom.compute_derivative(t, &y) * dt;
        let k2 = self.eom.compute_derivative(t + half, &(y + k1 * 0.5)) * dt;
        let k3 = self.eom.compute_derivative(t + half, &(y + k2 * 0.5)) * dt;
        let k4 = self.eom.compute_derivative(t + dt, &(y + k3)) * dt;

        y + k1 / 6.0 + k2 / 3.0 + k3 / 3.0 + k4 / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::State;
    use approx::assert_abs_diff_eq;
    use std::cell::{Cell, RefCell};

    /// dy/dt = -y on every component, recording the times it was evaluated at.
    struct Decay {
        calls: Cell<usize>,
        times: RefCell<Vec<f64>>,
    }

    impl Decay {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                times: RefCell::new(Vec::new()),
            }
        }
    }

    impl EquationsOfMotion for Decay {
        type State = State;

        fn compute_derivative(&self, t: f64, state: &State) -> State {
            self.calls.set(self.calls.get() + 1);
            self.times.borrow_mut().push(t);
            *state * -1.0
        }
    }

    #[test]
    fn test_four_evaluations_per_step() {
        let rk4 = RK4::new(Decay::new());
        rk4.integrate(1.0, &State::new(1.0, 1.0, 1.0, 1.0), 0.5);
        assert_eq!(rk4.eom().calls.get(), 4);
        assert_eq!(*rk4.eom().times.borrow(), vec![1.0, 1.25, 1.25, 1.5]);
    }

    #[test]
    fn test_exponential_decay_single_step() {
        // One RK4 step of y' = -y is the degree 4 Taylor polynomial of e^-h.
        let h: f64 = 0.1;
        let expected = 1.0 - h + h.powi(2) / 2.0 - h.powi(3) / 6.0 + h.powi(4) / 24.0;

        let rk4 = RK4::new(Decay::new());
        let next = rk4.integrate(0.0, &State::new(1.0, 2.0, -1.0, 0.0), h);

        assert_abs_diff_eq!(next.theta1(), expected, epsilon = 1e-15);
        assert_abs_diff_eq!(next.omega1(), 2.0 * expected, epsilon = 1e-15);
        assert_abs_diff_eq!(next.theta2(), -expected, epsilon = 1e-15);
        assert_eq!(next.omega2(), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let rk4 = RK4::new(Decay::new());
        let state = State::new(0.3, -0.2, 0.1, 0.9);
        assert_eq!(rk4.integrate(0.0, &state, 0.01), rk4.integrate(0.0, &state, 0.01));
    }

    #[test]
    fn test_input_untouched() {
        let rk4 = RK4::new(Decay::new());
        let state = State::new(0.3, -0.2, 0.1, 0.9);
        let copy = state;
        let _ = rk4.integrate(0.0, &state, 0.5);
        assert_eq!(state, copy);
    }
}
