//! Command-line arguments for the headless runner.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Keplerian satellite orbit simulator.
///
/// CLI values override settings loaded from the RON config file.
#[derive(Parser, Debug, Default)]
#[command(name = "orbit-sim", about = "Keplerian satellite orbit simulator")]
pub struct CliArgs {
    /// Path to a RON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Simulation time to cover (time units).
    #[arg(long)]
    pub duration: Option<f64>,

    /// Raw frame delta (time units).
    #[arg(long)]
    pub dt: Option<f64>,

    /// Time multiplier, 0.1 to 100.
    #[arg(long)]
    pub multiplier: Option<f64>,

    /// Semi-major axis (scene units).
    #[arg(long, allow_negative_numbers = true)]
    pub semimajor_axis: Option<f64>,

    /// Eccentricity, 0 to 0.99.
    #[arg(long, allow_negative_numbers = true)]
    pub eccentricity: Option<f64>,

    /// Inclination in degrees, 0 to 180.
    #[arg(long, allow_negative_numbers = true)]
    pub inclination: Option<f64>,

    /// Argument of periapsis in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub arg_periapsis: Option<f64>,

    /// Longitude of the ascending node in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub raan: Option<f64>,

    /// Write the sampled trajectory as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the run summary as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(d) = args.duration {
            self.sim.duration = d;
        }
        if let Some(dt) = args.dt {
            self.sim.dt = dt;
        }
        if let Some(m) = args.multiplier {
            self.sim.time_multiplier = m;
        }
        let el = &mut self.orbit.elements;
        if let Some(a) = args.semimajor_axis {
            el.sma = a;
        }
        if let Some(e) = args.eccentricity {
            el.ecc = e;
        }
        if let Some(i) = args.inclination {
            el.inc = i;
        }
        if let Some(w) = args.arg_periapsis {
            el.argp = w;
        }
        if let Some(o) = args.raan {
            el.raan = o;
        }
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }
    }
}
