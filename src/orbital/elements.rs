use serde::{Deserialize, Serialize};

use crate::error::ElementError;

pub const MAX_ECCENTRICITY: f64 = 0.99;
pub const MAX_INCLINATION_DEG: f64 = 180.0;

/// The five independent Keplerian elements of the simulated orbit.
/// Angles are stored in degrees, as edited by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalElements {
    pub sma: f64,  // semi-major axis, scene units (> 0)
    pub ecc: f64,  // eccentricity, [0, 0.99]
    pub inc: f64,  // inclination, deg, [0, 180]
    pub argp: f64, // argument of periapsis, deg, [0, 360)
    pub raan: f64, // longitude of ascending node, deg, [0, 360)
}

impl Default for OrbitalElements {
    fn default() -> Self {
        Self {
            sma: 12.0,
            ecc: 0.3,
            inc: 30.0,
            argp: 0.0,
            raan: 0.0,
        }
    }
}

impl OrbitalElements {
    /// Periapsis distance a(1 - e).
    pub fn periapsis(&self) -> f64 {
        self.sma * (1.0 - self.ecc)
    }

    /// Apoapsis distance a(1 + e).
    pub fn apoapsis(&self) -> f64 {
        self.sma * (1.0 + self.ecc)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Outcome of an accepted element edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    /// Stored exactly as requested.
    Accepted(f64),
    /// Clamped or wrapped into the valid domain before storing.
    Adjusted { requested: f64, applied: f64 },
}

impl Edit {
    fn from_pair(requested: f64, applied: f64) -> Self {
        if requested == applied {
            Edit::Accepted(applied)
        } else {
            Edit::Adjusted { requested, applied }
        }
    }

    /// The value that ends up in the element store.
    pub fn applied(&self) -> f64 {
        match *self {
            Edit::Accepted(v) => v,
            Edit::Adjusted { applied, .. } => applied,
        }
    }

    pub fn was_adjusted(&self) -> bool {
        matches!(self, Edit::Adjusted { .. })
    }
}

fn finite(element: &'static str, value: f64) -> Result<f64, ElementError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ElementError::NonFinite { element, value })
    }
}

pub fn validate_sma(value: f64) -> Result<Edit, ElementError> {
    let value = finite("semi-major axis", value)?;
    if value <= 0.0 {
        return Err(ElementError::NonPositiveSemimajorAxis(value));
    }
    Ok(Edit::Accepted(value))
}

pub fn validate_ecc(value: f64) -> Result<Edit, ElementError> {
    let value = finite("eccentricity", value)?;
    Ok(Edit::from_pair(value, value.clamp(0.0, MAX_ECCENTRICITY)))
}

pub fn validate_inc(value: f64) -> Result<Edit, ElementError> {
    let value = finite("inclination", value)?;
    Ok(Edit::from_pair(value, value.clamp(0.0, MAX_INCLINATION_DEG)))
}

pub fn validate_angle(element: &'static str, value: f64) -> Result<Edit, ElementError> {
    let value = finite(element, value)?;
    Ok(Edit::from_pair(value, normalize_deg(value)))
}

/// Wrap an angle in degrees into [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
