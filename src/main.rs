use clap::{Args, Parser, Subcommand};
use dpend::config::pendulum::PendulumParameters;
use dpend::errors::DpendError;
use dpend::output::writer::{write_csv, write_csv_extended, write_ensemble, write_text};
use dpend::output::OutputFormat;
use dpend::simulation::ensemble::{run_ensemble, sample_members, EnsembleConfig};
use dpend::simulation::{propagate, InitialConditions, SimulationConfig};
use log::{info, warn};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Double pendulum integrated with fixed-step fourth order Runge-Kutta.
#[derive(Debug, Parser)]
#[command(name = "dpend", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Integrate a single trajectory and print every point
    Solve(SolveArgs),
    /// Integrate randomized pendulums in parallel and summarize their final states
    Ensemble(EnsembleArgs),
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Start time (s)
    #[arg(allow_negative_numbers = true)]
    t_min: f64,
    /// End time (s)
    #[arg(allow_negative_numbers = true)]
    t_max: f64,
    /// Initial angle of pendulum 1 (deg)
    #[arg(allow_negative_numbers = true)]
    th10: f64,
    /// Initial angular velocity of pendulum 1 (deg/s)
    #[arg(allow_negative_numbers = true)]
    w10: f64,
    /// Initial angle of pendulum 2 (deg)
    #[arg(allow_negative_numbers = true)]
    th20: f64,
    /// Initial angular velocity of pendulum 2 (deg/s)
    #[arg(allow_negative_numbers = true)]
    w20: f64,
    /// Number of trajectory points, at least 2
    nstep: usize,

    #[command(flatten)]
    physics: PhysicsArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Append bob positions and total energy to every csv row
    #[arg(long)]
    extended: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct PhysicsArgs {
    /// One-row csv with header gravity,length1,length2,mass1,mass2
    #[arg(long, conflicts_with_all = ["gravity", "length1", "length2", "mass1", "mass2"])]
    parameters: Option<PathBuf>,
    #[arg(long)]
    gravity: Option<f64>,
    #[arg(long)]
    length1: Option<f64>,
    #[arg(long)]
    length2: Option<f64>,
    #[arg(long)]
    mass1: Option<f64>,
    #[arg(long)]
    mass2: Option<f64>,
}

impl PhysicsArgs {
    fn resolve(&self) -> Result<PendulumParameters, DpendError> {
        if let Some(path) = &self.parameters {
            return PendulumParameters::from_csv(path);
        }

        let defaults = PendulumParameters::default();
        Ok(PendulumParameters::new(
            self.gravity.unwrap_or(defaults.gravity),
            self.length1.unwrap_or(defaults.length1),
            self.length2.unwrap_or(defaults.length2),
            self.mass1.unwrap_or(defaults.mass1),
            self.mass2.unwrap_or(defaults.mass2),
        ))
    }
}

#[derive(Debug, Args)]
struct EnsembleArgs {
    #[arg(long, default_value_t = 16)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// End time (s)
    #[arg(long, default_value_t = 10.0)]
    t_max: f64,
    /// Points per trajectory, at least 2
    #[arg(long, default_value_t = 1000)]
    steps: usize,
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, DpendError> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn solve(args: &SolveArgs) -> Result<(), DpendError> {
    if args.extended && args.format == OutputFormat::Text {
        return Err(DpendError::ExtendedTextOutput);
    }

    let parameters = args.physics.resolve()?;
    let initial = InitialConditions::new(args.th10, args.w10, args.th20, args.w20);
    let config = SimulationConfig::new(args.t_min, args.t_max, initial, args.nstep)?;

    info!(
        "Solving t = [{}, {}] s with {} points (h = {} s), parameters {:?}",
        config.t_min,
        config.t_max,
        config.steps(),
        config.step_size(),
        parameters
    );

    let trajectory = propagate(&parameters, &config);

    if let Some(index) = trajectory.first_non_finite() {
        warn!(
            "Non-finite state from t = {} s onward; check the pendulum parameters and step count",
            trajectory.points()[index].time
        );
    }
    info!(
        "Maximum relative energy drift: {:e}",
        trajectory.energy_drift(&parameters)
    );

    let out = open_output(args.output.as_deref())?;
    match (args.format, args.extended) {
        (OutputFormat::Text, _) => write_text(out, &trajectory),
        (OutputFormat::Csv, false) => write_csv(out, &trajectory),
        (OutputFormat::Csv, true) => write_csv_extended(out, &parameters, &trajectory),
    }
}

fn ensemble(args: &EnsembleArgs) -> Result<(), DpendError> {
    let config = EnsembleConfig {
        count: args.count,
        seed: args.seed,
        t_max: args.t_max,
        steps: args.steps,
        ..EnsembleConfig::default()
    };

    let members = sample_members(&config)?;
    info!(
        "Running {} pendulums (seed {}) on {} threads",
        members.len(),
        config.seed,
        rayon::current_num_threads()
    );

    let results = run_ensemble(&members);
    let diverged = results.iter().filter(|r| !r.final_state.is_finite()).count();
    if diverged > 0 {
        warn!("{} of {} runs ended in a non-finite state", diverged, results.len());
    }

    write_ensemble(open_output(args.output.as_deref())?, &results)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Solve(args) => solve(args)?,
        Commands::Ensemble(args) => ensemble(args)?,
    }

    Ok(())
}
