use nalgebra::Vector3;
use tracing::{debug, info};

use super::clock::FrameClock;
use super::event::{default_detectors, EventDetector, SimEvent};
use crate::config::SimConfig;
use crate::orbital::Propagator;

/// Hard cap on recorded samples for a single run.
const MAX_SAMPLES: usize = 200_000;

/// Satellite state recorded once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time: f64,          // simulation time units
    pub mean_anomaly: f64,  // rad
    pub pos: Vector3<f64>,  // reference frame
}

impl Sample {
    pub fn capture(time: f64, prop: &Propagator) -> Self {
        Self {
            time,
            mean_anomaly: prop.mean_anomaly(),
            pos: prop.satellite_position(),
        }
    }
}

// ---------------------------------------------------------------------------
// Headless frame loop
// ---------------------------------------------------------------------------

/// Run the frame loop for `config.duration` simulation time units with custom
/// detectors. Each frame feeds a raw delta of `config.dt` through a
/// [`FrameClock`], then calls `update` and samples the position.
pub fn simulate_with(
    prop: &mut Propagator,
    config: &SimConfig,
    detectors: &mut [Box<dyn EventDetector>],
) -> (Vec<Sample>, Vec<SimEvent>) {
    let mut clock = FrameClock::new(config.time_multiplier, config.max_frame_dt);

    let mut trajectory = Vec::new();
    let mut events = Vec::new();

    let mut prev = Sample::capture(0.0, prop);
    trajectory.push(prev.clone());

    info!(
        duration = config.duration,
        dt = config.dt,
        multiplier = clock.multiplier(),
        period = prop.period(),
        "starting orbit run"
    );

    while clock.elapsed() < config.duration && trajectory.len() < MAX_SAMPLES {
        let dt = clock.step(config.dt);
        if dt <= 0.0 {
            debug!("zero time step, stopping");
            break;
        }
        prop.update(dt);
        let current = Sample::capture(clock.elapsed(), prop);

        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&prev, &current) {
                debug!(time = current.time, ?kind, "event");
                events.push(SimEvent { time: current.time, kind, sample: current.clone() });
            }
        }

        trajectory.push(current.clone());
        prev = current;
    }

    info!(samples = trajectory.len(), events = events.len(), "orbit run finished");
    (trajectory, events)
}

/// Simulate with periapsis, apoapsis and node detectors (convenience wrapper).
pub fn simulate(prop: &mut Propagator, config: &SimConfig) -> (Vec<Sample>, Vec<SimEvent>) {
    let mut detectors = default_detectors();
    simulate_with(prop, config, &mut detectors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
