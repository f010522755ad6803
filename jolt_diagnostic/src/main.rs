//! Offline diagnostic runner for the jolt trajectory generator.
//!
//! Loads a motion scenario from a TOML file, runs the cyclic update loop to
//! completion, and writes the sampled trajectory as CSV (stdout or a file)
//! plus a short summary to the log. Not part of the real-time core.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use jolt::{Input, Output, Status, TrajectoryGenerator};

/// Largest DoF count the runner instantiates.
const MAX_SCENARIO_DOFS: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "jolt_diagnostic", about = "Run a motion scenario and dump samples")]
struct Args {
    /// Scenario TOML file.
    scenario: PathBuf,

    /// Write CSV samples to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sample decimation: write every n-th cycle.
    #[arg(long, default_value_t = 1)]
    every: usize,
}

// ─── Scenario Schema ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Scenario {
    /// Cycle period [s].
    delta_time: f64,
    /// Optional lower bound on the trajectory duration [s].
    minimum_duration: Option<f64>,
    /// One entry per degree of freedom.
    dof: Vec<DofScenario>,
}

#[derive(Debug, Deserialize)]
struct DofScenario {
    #[serde(default)]
    current_position: f64,
    #[serde(default)]
    current_velocity: f64,
    #[serde(default)]
    current_acceleration: f64,

    target_position: f64,
    #[serde(default)]
    target_velocity: f64,
    #[serde(default)]
    target_acceleration: f64,

    max_velocity: f64,
    max_acceleration: f64,
    max_jerk: f64,

    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Error)]
enum DiagnosticError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("scenario needs between 1 and {MAX_SCENARIO_DOFS} DoFs, got {0}")]
    DofCount(usize),
    #[error("cycle period must be positive, got {0}")]
    CyclePeriod(f64),
    #[error("planning failed: {0}")]
    Planning(#[from] jolt::JoltError),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

// ─── Runner ─────────────────────────────────────────────────────────

fn scenario_input<const D: usize>(scenario: &Scenario) -> Input<D> {
    let mut input = Input::<D>::default();
    input.minimum_duration = scenario.minimum_duration;
    for (dof, cfg) in scenario.dof.iter().enumerate() {
        input.current_position[dof] = cfg.current_position;
        input.current_velocity[dof] = cfg.current_velocity;
        input.current_acceleration[dof] = cfg.current_acceleration;
        input.target_position[dof] = cfg.target_position;
        input.target_velocity[dof] = cfg.target_velocity;
        input.target_acceleration[dof] = cfg.target_acceleration;
        input.max_velocity[dof] = cfg.max_velocity;
        input.max_acceleration[dof] = cfg.max_acceleration;
        input.max_jerk[dof] = cfg.max_jerk;
        input.enabled[dof] = cfg.enabled;
    }
    input
}

fn run<const D: usize>(
    scenario: &Scenario,
    every: usize,
    sink: &mut dyn Write,
) -> Result<(), DiagnosticError> {
    let mut generator = TrajectoryGenerator::<D>::new(scenario.delta_time);
    let mut input = scenario_input::<D>(scenario);
    let mut output = Output::<D>::default();

    write!(sink, "time")?;
    for dof in 0..D {
        write!(sink, ",p{dof},v{dof},a{dof}")?;
    }
    writeln!(sink)?;

    let mut tick: usize = 0;
    let mut clock = 0.0;
    loop {
        let status = generator.update(&input, &mut output)?;
        clock += scenario.delta_time;
        // the finishing sample is always written so the CSV ends on target
        if tick % every == 0 || status == Status::Finished {
            write!(sink, "{clock:.6}")?;
            for dof in 0..D {
                write!(
                    sink,
                    ",{:.9},{:.9},{:.9}",
                    output.new_position[dof], output.new_velocity[dof],
                    output.new_acceleration[dof]
                )?;
            }
            writeln!(sink)?;
        }
        if output.new_calculation {
            info!(
                duration = output.duration,
                latency_us = output.calculation_duration,
                "new trajectory"
            );
        }
        tick += 1;
        if status == Status::Finished {
            break;
        }
        input.current_position = output.new_position;
        input.current_velocity = output.new_velocity;
        input.current_acceleration = output.new_acceleration;
    }

    info!(
        ticks = tick,
        duration = output.duration,
        "scenario finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<(), DiagnosticError> {
    let text = fs::read_to_string(&args.scenario).map_err(|source| DiagnosticError::Read {
        path: args.scenario.display().to_string(),
        source,
    })?;
    let scenario: Scenario = toml::from_str(&text)?;

    if scenario.delta_time <= 0.0 {
        return Err(DiagnosticError::CyclePeriod(scenario.delta_time));
    }
    let dofs = scenario.dof.len();
    let every = args.every.max(1);

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    match dofs {
        1 => run::<1>(&scenario, every, &mut sink),
        2 => run::<2>(&scenario, every, &mut sink),
        3 => run::<3>(&scenario, every, &mut sink),
        4 => run::<4>(&scenario, every, &mut sink),
        n => Err(DiagnosticError::DofCount(n)),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
