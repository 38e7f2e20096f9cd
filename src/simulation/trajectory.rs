use crate::errors::DpendError;
use crate::integrators::rk4::RK4;
use crate::models::pendulum::PendulumProperties;
use crate::models::State;
use crate::physics::dynamics::DoublePendulumDynamics;
use crate::physics::energy::calculate_energy;
use log::debug;

/// Initial angles (degrees) and angular velocities (degrees per second).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

impl InitialConditions {
    pub fn new(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        Self {
            theta1,
            omega1,
            theta2,
            omega2,
        }
    }

    pub fn to_state(&self) -> State {
        State::from_degrees(self.theta1, self.omega1, self.theta2, self.omega2)
    }
}

/// Time range, initial conditions and step count of a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub t_min: f64,
    pub t_max: f64,
    pub initial: InitialConditions,
    steps: usize,
}

impl SimulationConfig {
    /// `steps` is the number of trajectory points including the initial one and must be at least 2.
    pub fn new(
        t_min: f64,
        t_max: f64,
        initial: InitialConditions,
        steps: usize,
    ) -> Result<Self, DpendError> {
        if steps < 2 {
            return Err(DpendError::InvalidStepCount(steps));
        }

        Ok(Self {
            t_min,
            t_max,
            initial,
            steps,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn step_size(&self) -> f64 {
        (self.t_max - self.t_min) / (self.steps - 1) as f64
    }

    pub fn time_at(&self, index: usize) -> f64 {
        self.t_min + index as f64 * self.step_size()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub time: f64,
    pub state: State,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrajectoryPoint> {
        self.points.iter()
    }

    /// Index of the first point holding a NaN or infinite component.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points.iter().position(|p| !p.state.is_finite())
    }

    /// Largest relative deviation of the total mechanical energy from its initial value.
    /// NaN once any point is non-finite.
    pub fn energy_drift<P: PendulumProperties>(&self, pendulum: &P) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        let initial_energy = calculate_energy(pendulum, &first.state);
        let scale = if initial_energy == 0.0 {
            1.0
        } else {
            initial_energy.abs()
        };

        self.points
            .iter()
            .map(|p| (calculate_energy(pendulum, &p.state) - initial_energy).abs() / scale)
            .fold(0.0, |acc, d| if d.is_nan() || d > acc { d } else { acc })
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Integrates a double pendulum over `config`, one RK4 step per interval.
pub fn propagate<P: PendulumProperties>(pendulum: &P, config: &SimulationConfig) -> Trajectory {
    let integrator = RK4::new(DoublePendulumDynamics::new(pendulum));
    let h = config.step_size();

    debug!(
        "Propagating {} points over [{}, {}] s with h = {} s",
        config.steps(),
        config.t_min,
        config.t_max,
        h
    );

    let mut points = Vec::with_capacity(config.steps());
    let mut state = config.initial.to_state();
    points.push(TrajectoryPoint {
        time: config.time_at(0),
        state,
    });

    for i in 0..config.steps() - 1 {
        state = integrator.integrate(config.time_at(i), &state, h);
        points.push(TrajectoryPoint {
            time: config.time_at(i + 1),
            state,
        });
    }

    Trajectory { points }
}
