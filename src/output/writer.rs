use crate::errors::DpendError;
use crate::models::pendulum::PendulumProperties;
use crate::physics::energy::calculate_energy;
use crate::physics::kinematics::bob_positions;
use crate::simulation::ensemble::EnsembleResult;
use crate::simulation::trajectory::{Trajectory, TrajectoryPoint};
use clap::ValueEnum;
use csv::Writer;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per point, five space separated `%f` columns.
    Text,
    Csv,
}

#[derive(Debug, Serialize)]
struct TrajectoryRecord {
    time: f64,
    theta1: f64,
    omega1: f64,
    theta2: f64,
    omega2: f64,
}

impl From<&TrajectoryPoint> for TrajectoryRecord {
    fn from(point: &TrajectoryPoint) -> Self {
        Self {
            time: point.time,
            theta1: point.state.theta1(),
            omega1: point.state.omega1(),
            theta2: point.state.theta2(),
            omega2: point.state.omega2(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExtendedTrajectoryRecord {
    time: f64,
    theta1: f64,
    omega1: f64,
    theta2: f64,
    omega2: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    energy: f64,
}

impl ExtendedTrajectoryRecord {
    fn new<P: PendulumProperties>(pendulum: &P, point: &TrajectoryPoint) -> Self {
        let (upper, lower) = bob_positions(pendulum, &point.state);
        Self {
            time: point.time,
            theta1: point.state.theta1(),
            omega1: point.state.omega1(),
            theta2: point.state.theta2(),
            omega2: point.state.omega2(),
            x1: upper.x,
            y1: upper.y,
            x2: lower.x,
            y2: lower.y,
            energy: calculate_energy(pendulum, &point.state),
        }
    }
}

#[derive(Debug, Serialize)]
struct EnsembleRecord {
    index: usize,
    length1: f64,
    length2: f64,
    mass1: f64,
    mass2: f64,
    theta1_deg: f64,
    theta2_deg: f64,
    final_time: f64,
    theta1: f64,
    omega1: f64,
    theta2: f64,
    omega2: f64,
    energy_drift: f64,
}

impl From<&EnsembleResult> for EnsembleRecord {
    fn from(result: &EnsembleResult) -> Self {
        let params = result.member.parameters;
        let initial = result.member.config.initial;
        Self {
            index: result.member.index,
            length1: params.length1,
            length2: params.length2,
            mass1: params.mass1,
            mass2: params.mass2,
            theta1_deg: initial.theta1,
            theta2_deg: initial.theta2,
            final_time: result.final_time,
            theta1: result.final_state.theta1(),
            omega1: result.final_state.omega1(),
            theta2: result.final_state.theta2(),
            omega2: result.final_state.omega2(),
            energy_drift: result.energy_drift,
        }
    }
}

/// A single `%f` column: six decimals, C spelling for non-finite values.
fn format_fixed(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_nan() {
        format!("{}nan", sign)
    } else if value.is_infinite() {
        format!("{}inf", sign)
    } else {
        format!("{:.6}", value)
    }
}

pub fn format_text_line(point: &TrajectoryPoint) -> String {
    [
        point.time,
        point.state.theta1(),
        point.state.omega1(),
        point.state.theta2(),
        point.state.omega2(),
    ]
    .map(format_fixed)
    .join(" ")
}

pub fn write_text<W: Write>(mut out: W, trajectory: &Trajectory) -> Result<(), DpendError> {
    for point in trajectory {
        writeln!(out, "{}", format_text_line(point))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(out: W, trajectory: &Trajectory) -> Result<(), DpendError> {
    let mut writer = Writer::from_writer(out);
    for point in trajectory {
        writer.serialize(TrajectoryRecord::from(point))?;
    }
    writer.flush()?;
    Ok(())
}

/// CSV with bob positions and total energy appended to every row.
pub fn write_csv_extended<W: Write, P: PendulumProperties>(
    out: W,
    pendulum: &P,
    trajectory: &Trajectory,
) -> Result<(), DpendError> {
    let mut writer = Writer::from_writer(out);
    for point in trajectory {
        writer.serialize(ExtendedTrajectoryRecord::new(pendulum, point))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_ensemble<W: Write>(out: W, results: &[EnsembleResult]) -> Result<(), DpendError> {
    let mut writer = Writer::from_writer(out);
    for result in results {
        writer.serialize(EnsembleRecord::from(result))?;
    }
    writer.flush()?;
    Ok(())
}
