use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use orbit_sim::cli::CliArgs;
use orbit_sim::io::{self, OrbitSummary};
use orbit_sim::physics::gravity::EARTH_RADIUS;
use orbit_sim::sim::event::{is_radius_alert, surface_detectors, SimEvent};
use orbit_sim::sim::{self, Sample};
use orbit_sim::{Config, ConfigError, Propagator};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(err) => {
            orbit_sim::logging::init_logging("info");
            error!(%err, "could not load configuration");
            return ExitCode::FAILURE;
        }
    };
    orbit_sim::logging::init_logging(&config.log_level);

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let mut prop = config.orbit.build();
    let mut detectors = surface_detectors();
    let (trajectory, events) = sim::simulate_with(&mut prop, &config.sim, &mut detectors);
    if let Some(alert) = events.iter().find(|e| is_radius_alert(&e.kind)) {
        warn!(
            time = alert.time,
            periapsis = prop.elements().periapsis(),
            "orbit passes below the surface of the central body"
        );
    }
    let summary = OrbitSummary::from_run(&prop, &trajectory, &events);

    print_report(&prop, &config, &trajectory, &events, &summary);

    // -----------------------------------------------------------------------
    // Exports
    // -----------------------------------------------------------------------
    if let Some(path) = &args.csv {
        if let Err(err) = io::write_trajectory_file(path, &trajectory) {
            error!(path = %path.display(), %err, "failed to write trajectory CSV");
            return ExitCode::FAILURE;
        }
        info!(path = %path.display(), rows = trajectory.len(), "wrote trajectory CSV");
    }
    if let Some(path) = &args.json {
        if let Err(err) = io::write_summary_file(path, &summary) {
            error!(path = %path.display(), %err, "failed to write summary JSON");
            return ExitCode::FAILURE;
        }
        info!(path = %path.display(), "wrote summary JSON");
    }

    ExitCode::SUCCESS
}

fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new("orbit.ron"))?,
    };
    config.apply_cli_overrides(args);
    Ok(config)
}

fn print_report(
    prop: &Propagator,
    config: &Config,
    trajectory: &[Sample],
    events: &[SimEvent],
    summary: &OrbitSummary,
) {
    let el = prop.elements();

    println!();
    println!("====================================================================");
    println!("  SATELLITE ORBIT SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Orbital Elements");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Semi-major axis: {:>8.3}      Eccentricity:  {:>8.3}",
        el.sma, el.ecc
    );
    println!(
        "  Inclination:     {:>8.2} deg  Arg. periapsis:{:>8.2} deg",
        el.inc, el.argp
    );
    println!("  Long. asc. node: {:>8.2} deg", el.raan);
    println!(
        "  Periapsis:       {:>8.3}      Apoapsis:      {:>8.3}",
        el.periapsis(),
        el.apoapsis()
    );
    println!(
        "  Period:          {:>8.4}      Mean motion:   {:>8.3} rad/t",
        prop.period(),
        prop.mean_motion()
    );
    println!();

    println!("  Orbit Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for ev in events.iter().take(24) {
        println!(
            "  {:<16} t={:>8.4}   r={:>8.3}   pos=({:>7.3}, {:>7.3}, {:>7.3})",
            format!("{:?}", ev.kind).to_uppercase(),
            ev.time,
            ev.sample.pos.norm(),
            ev.sample.pos.x,
            ev.sample.pos.y,
            ev.sample.pos.z,
        );
    }
    if events.len() > 24 {
        println!("  ... {} more", events.len() - 24);
    }
    println!();

    println!("  Run Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Orbits:          {:>8}      Node crossings:{:>8}",
        summary.periapsis_passes, summary.node_crossings
    );
    println!(
        "  Min radius:      {:>8.3}      Max radius:    {:>8.3}",
        summary.min_radius, summary.max_radius
    );
    println!(
        "  Min altitude:    {:>8.3}      (Earth radius {:.3})",
        summary.min_altitude, EARTH_RADIUS
    );
    println!("  Max speed:       {:>8.2}", summary.max_speed);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}",
        "t", "M (deg)", "x", "y", "z", "r"
    );
    println!("  {}", "─".repeat(58));

    let sample_interval = (trajectory.len() / 30).max(1);
    for (i, s) in trajectory.iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!(
            "  {:>8.4}  {:>8.2}  {:>8.3}  {:>8.3}  {:>8.3}  {:>8.3}",
            s.time,
            s.mean_anomaly.to_degrees(),
            s.pos.x,
            s.pos.y,
            s.pos.z,
            s.pos.norm()
        );
    }

    println!();
    println!(
        "  Simulation: {} steps, dt={} x{}",
        trajectory.len(),
        config.sim.dt,
        config.sim.time_multiplier
    );
    println!("====================================================================");
    println!();
}
