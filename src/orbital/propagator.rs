use std::f64::consts::TAU;

use nalgebra::Vector3;
use tracing::{debug, warn};

use super::elements::{self, Edit, OrbitalElements};
use super::frame;
use super::kepler::{self, KeplerSolution};
use crate::error::ElementError;
use crate::physics::gravity::{is_usable_period, kepler_period, mean_motion, MU_EARTH};

/// Above this many whole revolutions `update` wraps with `rem_euclid`
/// instead of repeated subtraction.
const MAX_WRAP_LOOPS: f64 = 1.0e6;

/// Single-satellite two-body propagator.
///
/// Owns the element set, the mean anomaly and the cached period. The period
/// is recomputed inside `set_semimajor_axis`, so it always matches the
/// current semi-major axis.
#[derive(Debug, Clone)]
pub struct Propagator {
    elements: OrbitalElements,
    mean_anom: f64, // rad, [0, 2π)
    period: f64,    // time units
    mu: f64,
}

impl Default for Propagator {
    fn default() -> Self {
        Self::new()
    }
}

impl Propagator {
    /// Default orbit around Earth: a=12, e=0.3, i=30°, ω=0°, Ω=0°, M=0.
    pub fn new() -> Self {
        Self::with_mu(MU_EARTH)
    }

    /// Default orbit around a body with gravitational parameter `mu`.
    /// A `mu` that gives no finite period for the default orbit falls back to Earth.
    pub fn with_mu(mu: f64) -> Self {
        let elements = OrbitalElements::default();
        let mu = if mu > 0.0 && is_usable_period(kepler_period(elements.sma, mu)) {
            mu
        } else {
            warn!(mu, "invalid gravitational parameter, using Earth");
            MU_EARTH
        };
        Self {
            elements,
            mean_anom: 0.0,
            period: kepler_period(elements.sma, mu),
            mu,
        }
    }

    /// Build from an arbitrary element set, routed through the validating setters.
    /// Rejected values fall back to the defaults.
    pub fn from_elements(el: &OrbitalElements, mu: f64) -> Self {
        let mut prop = Self::with_mu(mu);
        let _ = prop.set_semimajor_axis(el.sma);
        let _ = prop.set_eccentricity(el.ecc);
        let _ = prop.set_inclination(el.inc);
        let _ = prop.set_argument_of_periapsis(el.argp);
        let _ = prop.set_longitude_of_ascending_node(el.raan);
        prop
    }

    // -----------------------------------------------------------------------
    // Time evolution
    // -----------------------------------------------------------------------

    /// Advance the mean anomaly by `dt` time units.
    ///
    /// `dt` must be non-negative; negative or non-finite steps are ignored.
    /// Callers clamp stalled frames upstream (see [`crate::sim::FrameClock`]).
    pub fn update(&mut self, dt: f64) {
        if !(dt.is_finite() && dt >= 0.0) {
            warn!(dt, "ignoring invalid time step");
            return;
        }
        let advanced = self.mean_anom + self.mean_motion() * dt;
        if !advanced.is_finite() {
            warn!(dt, "time step overflows the mean anomaly, ignoring");
            return;
        }
        self.mean_anom = if advanced / TAU > MAX_WRAP_LOOPS {
            wrap_tau(advanced)
        } else {
            let mut m = advanced;
            while m >= TAU {
                m -= TAU;
            }
            m
        };
    }

    /// Current position in the reference frame, same units as the semi-major axis.
    pub fn satellite_position(&self) -> Vector3<f64> {
        frame::to_reference(self.solve().eccentric_anomaly, &self.elements)
    }

    /// Kepler solve for the current mean anomaly and eccentricity.
    pub fn solve(&self) -> KeplerSolution {
        let sol = kepler::solve_kepler(self.mean_anom, self.elements.ecc);
        if !sol.converged {
            debug!(
                mean_anomaly = self.mean_anom,
                ecc = self.elements.ecc,
                "kepler solve hit iteration cap"
            );
        }
        sol
    }

    /// True anomaly at the current mean anomaly, rad in (-π, π].
    pub fn true_anomaly(&self) -> f64 {
        kepler::true_anomaly(self.solve().eccentric_anomaly, self.elements.ecc)
    }

    /// Distance from the central body's centre.
    pub fn radius(&self) -> f64 {
        let e_anom = self.solve().eccentric_anomaly;
        self.elements.sma * (1.0 - self.elements.ecc * e_anom.cos())
    }

    /// Closed orbit ellipse in the reference frame, `samples` points uniform
    /// in eccentric anomaly, first point repeated at the end.
    pub fn orbit_path(&self, samples: usize) -> Vec<Vector3<f64>> {
        let samples = samples.max(3);
        let rot = frame::perifocal_to_reference(&self.elements);
        (0..=samples)
            .map(|k| {
                let e_anom = TAU * (k % samples) as f64 / samples as f64;
                rot * frame::perifocal_position(e_anom, self.elements.sma, self.elements.ecc)
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Mean motion n = 2π / T.
    pub fn mean_motion(&self) -> f64 {
        mean_motion(self.period)
    }

    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anom
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn elements(&self) -> OrbitalElements {
        self.elements
    }

    pub fn semimajor_axis(&self) -> f64 {
        self.elements.sma
    }

    pub fn eccentricity(&self) -> f64 {
        self.elements.ecc
    }

    pub fn inclination(&self) -> f64 {
        self.elements.inc
    }

    pub fn argument_of_periapsis(&self) -> f64 {
        self.elements.argp
    }

    pub fn longitude_of_ascending_node(&self) -> f64 {
        self.elements.raan
    }

    // -----------------------------------------------------------------------
    // Validated setters
    // -----------------------------------------------------------------------
    //
    // Each setter is fail-soft: a rejected value leaves the store untouched,
    // an out-of-range value is clamped or wrapped. The returned Result lets
    // callers tell these apart; the control panel simply ignores it.

    pub fn set_semimajor_axis(&mut self, value: f64) -> Result<Edit, ElementError> {
        let mu = self.mu;
        let checked = elements::validate_sma(value).and_then(|edit| {
            if is_usable_period(kepler_period(edit.applied(), mu)) {
                Ok(edit)
            } else {
                Err(ElementError::DegenerateOrbit { sma: value, mu })
            }
        });
        let edit = logged("semi-major axis", checked)?;
        self.elements.sma = edit.applied();
        self.period = kepler_period(self.elements.sma, self.mu);
        Ok(edit)
    }

    pub fn set_eccentricity(&mut self, value: f64) -> Result<Edit, ElementError> {
        let edit = logged("eccentricity", elements::validate_ecc(value))?;
        self.elements.ecc = edit.applied();
        Ok(edit)
    }

    pub fn set_inclination(&mut self, value: f64) -> Result<Edit, ElementError> {
        let edit = logged("inclination", elements::validate_inc(value))?;
        self.elements.inc = edit.applied();
        Ok(edit)
    }

    pub fn set_argument_of_periapsis(&mut self, value: f64) -> Result<Edit, ElementError> {
        let name = "argument of periapsis";
        let edit = logged(name, elements::validate_angle(name, value))?;
        self.elements.argp = edit.applied();
        Ok(edit)
    }

    pub fn set_longitude_of_ascending_node(&mut self, value: f64) -> Result<Edit, ElementError> {
        let name = "longitude of ascending node";
        let edit = logged(name, elements::validate_angle(name, value))?;
        self.elements.raan = edit.applied();
        Ok(edit)
    }

    /// Set the mean anomaly in radians, wrapped into [0, 2π).
    pub fn set_mean_anomaly(&mut self, value: f64) -> Result<Edit, ElementError> {
        if !value.is_finite() {
            return logged(
                "mean anomaly",
                Err(ElementError::NonFinite { element: "mean anomaly", value }),
            );
        }
        let wrapped = wrap_tau(value);
        self.mean_anom = wrapped;
        Ok(if wrapped == value {
            Edit::Accepted(value)
        } else {
            Edit::Adjusted { requested: value, applied: wrapped }
        })
    }

    /// Restore the default elements and put the satellite back at periapsis.
    pub fn reset(&mut self) {
        *self = Self::with_mu(self.mu);
        debug!("orbit reset to defaults");
    }
}

/// Wrap radians into [0, 2π).
fn wrap_tau(rad: f64) -> f64 {
    let wrapped = rad.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

fn logged(element: &str, result: Result<Edit, ElementError>) -> Result<Edit, ElementError> {
    match &result {
        Ok(Edit::Accepted(v)) => debug!(element, value = v, "element set"),
        Ok(Edit::Adjusted { requested, applied }) => {
            debug!(element, requested, applied, "element adjusted into range")
        }
        Err(err) => warn!(element, %err, "element edit rejected"),
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
