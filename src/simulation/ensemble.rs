use crate::config::pendulum::PendulumParameters;
use crate::constants::G;
use crate::errors::DpendError;
use crate::models::State;
use crate::simulation::trajectory::{propagate, InitialConditions, SimulationConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::ops::Range;

/// Sampling ranges for a randomized ensemble of pendulums.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleConfig {
    pub count: usize,
    pub seed: u64,
    pub t_max: f64,
    pub steps: usize,
    pub length_range: Range<f64>,
    pub mass_range: Range<f64>,
    pub angle_range: Range<f64>, // degrees
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            count: 16,
            seed: 0,
            t_max: 10.0,
            steps: 1000,
            length_range: 0.1..1.0,
            mass_range: 0.1..1.0,
            angle_range: -90.0..-85.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleMember {
    pub index: usize,
    pub parameters: PendulumParameters,
    pub config: SimulationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleResult {
    pub member: EnsembleMember,
    pub final_time: f64,
    pub final_state: State,
    pub energy_drift: f64,
}

/// Draws the members of an ensemble. Sampling is sequential so that a seed fixes every member.
pub fn sample_members(config: &EnsembleConfig) -> Result<Vec<EnsembleMember>, DpendError> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    (0..config.count)
        .map(|index| {
            let parameters = PendulumParameters::new(
                G,
                rng.gen_range(config.length_range.clone()),
                rng.gen_range(config.length_range.clone()),
                rng.gen_range(config.mass_range.clone()),
                rng.gen_range(config.mass_range.clone()),
            );
            let initial = InitialConditions::new(
                rng.gen_range(config.angle_range.clone()),
                0.0,
                rng.gen_range(config.angle_range.clone()),
                0.0,
            );
            let sim = SimulationConfig::new(0.0, config.t_max, initial, config.steps)?;

            Ok(EnsembleMember {
                index,
                parameters,
                config: sim,
            })
        })
        .collect()
}

/// Integrates every member independently on the rayon thread pool.
pub fn run_ensemble(members: &[EnsembleMember]) -> Vec<EnsembleResult> {
    members
        .par_iter()
        .map(|member| {
            let trajectory = propagate(&member.parameters, &member.config);
            // propagate always yields at least two points
            let last = trajectory.points()[trajectory.len() - 1];

            EnsembleResult {
                member: *member,
                final_time: last.time,
                final_state: last.state,
                energy_drift: trajectory.energy_drift(&member.parameters),
            }
        })
        .collect()
}
