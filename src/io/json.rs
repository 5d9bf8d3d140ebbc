use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::orbital::{OrbitalElements, Propagator};
use crate::physics::gravity::EARTH_RADIUS;
use crate::sim::event::{EventKind, SimEvent};
use crate::sim::Sample;

/// Summary statistics computed from an orbit run.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitSummary {
    pub elements: OrbitalElements,
    pub period: f64,
    pub mean_motion: f64,
    pub periapsis: f64,
    pub apoapsis: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_altitude: f64,
    pub max_speed: f64,
    pub duration: f64,
    pub samples: usize,
    pub periapsis_passes: usize,
    pub node_crossings: usize,
}

impl OrbitSummary {
    /// Compute summary from the propagator's final state and the recorded trajectory.
    pub fn from_run(prop: &Propagator, trajectory: &[Sample], events: &[SimEvent]) -> Self {
        let elements = prop.elements();

        let min_radius = trajectory
            .iter()
            .map(|s| s.pos.norm())
            .fold(f64::INFINITY, f64::min);
        let max_radius = trajectory.iter().map(|s| s.pos.norm()).fold(0.0_f64, f64::max);

        // finite differences between consecutive samples
        let max_speed = trajectory
            .windows(2)
            .map(|w| {
                let dt = w[1].time - w[0].time;
                if dt > 0.0 {
                    (w[1].pos - w[0].pos).norm() / dt
                } else {
                    0.0
                }
            })
            .fold(0.0_f64, f64::max);

        let periapsis_passes = events.iter().filter(|e| e.kind == EventKind::Periapsis).count();
        let node_crossings = events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::AscendingNode | EventKind::DescendingNode))
            .count();

        OrbitSummary {
            elements,
            period: prop.period(),
            mean_motion: prop.mean_motion(),
            periapsis: elements.periapsis(),
            apoapsis: elements.apoapsis(),
            min_radius,
            max_radius,
            min_altitude: min_radius - EARTH_RADIUS,
            max_speed,
            duration: trajectory.last().map_or(0.0, |s| s.time),
            samples: trajectory.len(),
            periapsis_passes,
            node_crossings,
        }
    }
}

/// Write the summary as pretty JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, summary: &OrbitSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the summary to a JSON file at the given path.
pub fn write_summary_file(path: &Path, summary: &OrbitSummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}
