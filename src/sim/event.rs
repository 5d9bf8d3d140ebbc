use std::f64::consts::PI;

use super::runner::Sample;
use crate::physics::gravity::EARTH_RADIUS;

// ---------------------------------------------------------------------------
// Orbit events
// ---------------------------------------------------------------------------

/// Kinds of orbit events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Periapsis,
    Apoapsis,
    AscendingNode,
    DescendingNode,
    Custom(String),
}

/// A discrete event observed between two consecutive samples.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub sample: Sample,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind>;
}

/// Periapsis passage: the mean anomaly wrapped past 2π.
pub struct PeriapsisDetector;

impl EventDetector for PeriapsisDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        (current.mean_anomaly < prev.mean_anomaly).then_some(EventKind::Periapsis)
    }
}

/// Apoapsis passage: the mean anomaly crossed π.
pub struct ApoapsisDetector;

impl EventDetector for ApoapsisDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        (prev.mean_anomaly < PI && current.mean_anomaly >= PI).then_some(EventKind::Apoapsis)
    }
}

/// Crossings of the reference XY plane. Silent for equatorial orbits.
pub struct NodeDetector;

impl EventDetector for NodeDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if prev.pos.z < 0.0 && current.pos.z >= 0.0 {
            Some(EventKind::AscendingNode)
        } else if prev.pos.z > 0.0 && current.pos.z <= 0.0 {
            Some(EventKind::DescendingNode)
        } else {
            None
        }
    }
}

/// Fires once when the distance from the central body first drops below a threshold.
pub struct RadiusDetector {
    pub radius: f64,
    fired: bool,
}

impl RadiusDetector {
    pub fn new(radius: f64) -> Self {
        Self { radius, fired: false }
    }
}

impl EventDetector for RadiusDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.pos.norm() >= self.radius && current.pos.norm() < self.radius {
            self.fired = true;
            Some(EventKind::Custom(format!("Radius below {:.2}", self.radius)))
        } else {
            None
        }
    }
}

/// Detectors used by [`super::simulate`].
pub fn default_detectors() -> Vec<Box<dyn EventDetector>> {
    vec![
        Box::new(PeriapsisDetector),
        Box::new(ApoapsisDetector),
        Box::new(NodeDetector),
    ]
}

/// Default detectors plus a one-shot alert when the orbit first dips below
/// the central body's surface.
pub fn surface_detectors() -> Vec<Box<dyn EventDetector>> {
    let mut detectors = default_detectors();
    detectors.push(Box::new(RadiusDetector::new(EARTH_RADIUS)));
    detectors
}

/// True for events raised by a [`RadiusDetector`].
pub fn is_radius_alert(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Custom(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn make_sample(mean_anomaly: f64, z: f64) -> Sample {
        Sample {
            time: 0.0,
            mean_anomaly,
            pos: Vector3::new(10.0, 0.0, z),
        }
    }

    #[test]
    fn periapsis_on_wrap() {
        let mut det = PeriapsisDetector;
        assert_eq!(
            det.check(&make_sample(6.2, 0.0), &make_sample(0.05, 0.0)),
            Some(EventKind::Periapsis)
        );
        assert_eq!(det.check(&make_sample(1.0, 0.0), &make_sample(1.1, 0.0)), None);
    }

    #[test]
    fn apoapsis_crossing() {
        let mut det = ApoapsisDetector;
        assert_eq!(
            det.check(&make_sample(3.1, 0.0), &make_sample(3.2, 0.0)),
            Some(EventKind::Apoapsis)
        );
        assert_eq!(det.check(&make_sample(3.2, 0.0), &make_sample(3.3, 0.0)), None);
    }

    #[test]
    fn node_crossings() {
        let mut det = NodeDetector;
        assert_eq!(
            det.check(&make_sample(1.0, -0.5), &make_sample(1.1, 0.2)),
            Some(EventKind::AscendingNode)
        );
        assert_eq!(
            det.check(&make_sample(1.0, 0.5), &make_sample(1.1, -0.2)),
            Some(EventKind::DescendingNode)
        );
        // Equatorial: z stays 0
        assert_eq!(det.check(&make_sample(1.0, 0.0), &make_sample(1.1, 0.0)), None);
    }

    #[test]
    fn radius_detector_fires_once() {
        let mut det = RadiusDetector::new(9.0);
        let far = Sample { pos: Vector3::new(9.5, 0.0, 0.0), ..make_sample(0.0, 0.0) };
        let near = Sample { pos: Vector3::new(8.5, 0.0, 0.0), ..make_sample(0.0, 0.0) };
        assert!(det.check(&far, &near).is_some());
        // Should not fire again
        assert!(det.check(&far, &near).is_none());
    }
}
