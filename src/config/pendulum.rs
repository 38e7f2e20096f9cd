use crate::constants::{G, L1, L2, M1, M2};
use crate::errors::DpendError;
use crate::models::pendulum::PendulumProperties;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hardwired reference pendulum: unit lengths and masses under 9.8 m/s².
pub struct UnitPendulum;

impl UnitPendulum {
    pub const GRAVITY: f64 = G;
    pub const LENGTH1: f64 = L1;
    pub const LENGTH2: f64 = L2;
    pub const MASS1: f64 = M1;
    pub const MASS2: f64 = M2;
}

impl PendulumProperties for UnitPendulum {
    fn gravity(&self) -> f64 {
        Self::GRAVITY
    }

    fn length1(&self) -> f64 {
        Self::LENGTH1
    }

    fn length2(&self) -> f64 {
        Self::LENGTH2
    }

    fn mass1(&self) -> f64 {
        Self::MASS1
    }

    fn mass2(&self) -> f64 {
        Self::MASS2
    }
}

/// Physical constants chosen at run time. Fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumParameters {
    pub gravity: f64,
    pub length1: f64,
    pub length2: f64,
    pub mass1: f64,
    pub mass2: f64,
}

impl PendulumParameters {
    pub fn new(gravity: f64, length1: f64, length2: f64, mass1: f64, mass2: f64) -> Self {
        Self {
            gravity,
            length1,
            length2,
            mass1,
            mass2,
        }
    }

    /// Reads the first record of a CSV file with header
    /// `gravity,length1,length2,mass1,mass2`.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, DpendError> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

        match reader.deserialize::<PendulumParameters>().next() {
            Some(record) => Ok(record?),
            None => Err(DpendError::MissingParameters(path.to_path_buf())),
        }
    }
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self::new(G, L1, L2, M1, M2)
    }
}

impl PendulumProperties for PendulumParameters {
    fn gravity(&self) -> f64 {
        self.gravity
    }

    fn length1(&self) -> f64 {
        self.length1
    }

    fn length2(&self) -> f64 {
        self.length2
    }

    fn mass1(&self) -> f64 {
        self.mass1
    }

    fn mass2(&self) -> f64 {
        self.mass2
    }
}
