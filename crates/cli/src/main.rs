use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use shm_solvers::{analysis, analytic, sweep, transient};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod table;

use config::ScenarioConfig;
use error::CliError;
use table::Table;

#[derive(Parser)]
#[command(name = "shm")]
#[command(about = "Simple harmonic motion explorer - analytic and numerical oscillators", long_about = None)]
struct Cli {
    /// Path to a TOML scenario file (defaults to ./shm.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the simulated duration in seconds
    #[arg(long, global = true)]
    t_max: Option<f64>,

    /// Override the number of time samples
    #[arg(long, global = true)]
    samples: Option<usize>,

    /// Output CSV file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ideal mass-spring oscillator: kinematics and energies
    Shm,
    /// Simple pendulum: small-angle model against the nonlinear model
    Pendulum,
    /// Period across a range of stiffness or mass
    Sweep {
        /// Which parameter to sweep
        #[arg(value_enum)]
        parameter: SweepParameter,
    },
    /// Damped mass-spring oscillator
    Damped,
    /// Print the effective configuration as TOML
    ShowConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum SweepParameter {
    /// Vary k with m fixed
    Stiffness,
    /// Vary m with k fixed
    Mass,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ScenarioConfig::load(cli.config.as_deref())?;
    if let Some(t_max) = cli.t_max {
        config.time.t_max = t_max;
    }
    if let Some(samples) = cli.samples {
        config.time.samples = samples;
    }

    let table = match cli.command {
        Commands::Shm => cmd_shm(&config)?,
        Commands::Pendulum => cmd_pendulum(&config)?,
        Commands::Sweep { parameter } => cmd_sweep(&config, parameter)?,
        Commands::Damped => cmd_damped(&config)?,
        Commands::ShowConfig => {
            let text = config.to_toml()?;
            let mut out = open_output(cli.output.as_deref())?;
            return out
                .write_all(text.as_bytes())
                .and_then(|()| out.flush())
                .map_err(CliError::Output);
        }
    };

    let out = open_output(cli.output.as_deref())?;
    table.write_csv(out).map_err(CliError::Output)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdout().lock()));
    };
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufWriter::new(file)))
}

fn cmd_shm(config: &ScenarioConfig) -> Result<Table, CliError> {
    let grid = config.grid()?;
    let params = config.oscillator()?;
    tracing::info!(omega = params.omega(), period = params.period(), "mass-spring");

    let out = analytic::shm(&params, &grid);

    Ok(Table::new()
        .column("t [s]", grid.as_slice().to_vec())
        .column("x [m]", out.x)
        .column("v [m/s]", out.v)
        .column("a [m/s^2]", out.a)
        .column("Ek [J]", out.kinetic)
        .column("Ep [J]", out.potential)
        .column("Et [J]", out.total))
}

fn cmd_pendulum(config: &ScenarioConfig) -> Result<Table, CliError> {
    let grid = config.grid()?;
    let params = config.pendulum()?;

    let linear = analytic::pendulum_linear(&params, &grid);
    let nonlinear = transient::pendulum::nonlinear_pendulum(&params, &grid);
    tracing::info!(period = linear.period, "small-angle period");
    if let Some(period) = analysis::measured_period(grid.as_slice(), &nonlinear.theta) {
        tracing::info!(period, "measured nonlinear period");
    }
    analysis::check_amplitude(
        &grid,
        &nonlinear.theta,
        params.theta0(),
        config.time.instability_factor,
    );

    Ok(Table::new()
        .column("t [s]", grid.as_slice().to_vec())
        .column("theta linear [deg]", linear.theta_degrees())
        .column("theta nonlinear [deg]", nonlinear.theta_degrees()))
}

fn cmd_sweep(config: &ScenarioConfig, parameter: SweepParameter) -> Result<Table, CliError> {
    let (mode, range) = match parameter {
        SweepParameter::Stiffness => config.stiffness_sweep()?,
        SweepParameter::Mass => config.mass_sweep()?,
    };

    let result = sweep::period_sweep(mode, &range)?;

    let label = match mode {
        sweep::SweepMode::VaryStiffness { .. } => "k [N/m]",
        sweep::SweepMode::VaryMass { .. } => "m [kg]",
    };
    Ok(Table::new()
        .column(label, result.values())
        .column("T [s]", result.periods()))
}

fn cmd_damped(config: &ScenarioConfig) -> Result<Table, CliError> {
    let grid = config.grid()?;
    let params = config.damped()?;

    let out = transient::damped::damped_oscillator(&params, &grid);
    tracing::info!(regime = ?out.regime, "damped oscillator");
    analysis::check_amplitude(
        &grid,
        &out.x,
        params.oscillator().amplitude(),
        config.time.instability_factor,
    );

    Ok(Table::new()
        .column("t [s]", grid.as_slice().to_vec())
        .column("x [m]", out.x)
        .column("v [m/s]", out.v))
}
