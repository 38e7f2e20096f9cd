use crate::constants::degrees_to_radians;
use nalgebra as na;

/// Double pendulum state `[θ1, ω1, θ2, ω2]` in radians and radians per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub data: na::Vector4<f64>,
}

impl State {
    pub fn new(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        State {
            data: na::Vector4::new(theta1, omega1, theta2, omega2),
        }
    }

    /// Builds a state from angles in degrees and angular velocities in degrees per second.
    pub fn from_degrees(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        State::new(
            degrees_to_radians(theta1),
            degrees_to_radians(omega1),
            degrees_to_radians(theta2),
            degrees_to_radians(omega2),
        )
    }

    pub fn zero() -> Self {
        State {
            data: na::Vector4::zeros(),
        }
    }

    pub fn theta1(&self) -> f64 {
        self.data[0]
    }

    pub fn omega1(&self) -> f64 {
        self.data[1]
    }

    pub fn theta2(&self) -> f64 {
        self.data[2]
    }

    pub fn omega2(&self) -> f64 {
        self.data[3]
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl std::ops::Add for State {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        State {
            data: self.data + other.data,
        }
    }
}

impl std::ops::Mul<f64> for State {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        State {
            data: self.data * scalar,
        }
    }
}

impl std::ops::Div<f64> for State {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        State {
            data: self.data / scalar,
        }
    }
}
