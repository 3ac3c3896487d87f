//! Thin command-line driver: selects the system and the integration
//! settings, runs the integrator, and writes the trajectory CSV consumed by
//! the plotting tooling.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use traject_core::output::trajectory_to_csv;
use traject_core::systems::DampedOscillator;
use traject_core::trajectory::{solve_rk4, SolveSettings};

/// Integrate a damped harmonic oscillator and write the trajectory CSV.
#[derive(Parser)]
#[command(name = "traject", version, about)]
struct Cli {
    /// Natural frequency omega_0.
    #[arg(long, default_value_t = 1.0)]
    omega_0: f64,

    /// Damping coefficient gamma.
    #[arg(long, default_value_t = 0.1)]
    gamma: f64,

    /// Initial position.
    #[arg(long, default_value_t = 1.0)]
    x0: f64,

    /// Initial velocity.
    #[arg(long, default_value_t = 0.0)]
    v0: f64,

    /// Initial time.
    #[arg(long, default_value_t = 0.0)]
    t0: f64,

    /// Maximum integration time.
    #[arg(long, default_value_t = 50.0)]
    tmax: f64,

    /// Step size.
    #[arg(long, default_value_t = 0.01)]
    dt: f64,

    /// Duration discarded before the first recorded sample.
    #[arg(long, default_value_t = 0.0)]
    transient: f64,

    /// Record only samples reaching multiples of this interval.
    #[arg(long)]
    output_interval: Option<f64>,

    /// Output CSV path.
    #[arg(long, default_value = "damped_oscillator.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let system = DampedOscillator::new(cli.omega_0, cli.gamma);
    let settings = SolveSettings {
        t0: cli.t0,
        tmax: cli.tmax,
        dt: cli.dt,
        transient: cli.transient,
        output_interval: cli.output_interval,
    };

    let trajectory = solve_rk4(&system, &[cli.x0, cli.v0], settings)?;
    trajectory_to_csv(&trajectory, &cli.output)?;

    if let Some((t, state)) = trajectory.last() {
        println!("Integration complete. Final state at t = {t}: {state:?}");
    }
    println!(
        "Wrote {} samples to {}",
        trajectory.len(),
        cli.output.display()
    );
    Ok(())
}
