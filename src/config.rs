//! Run configuration with defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::orbital::{OrbitalElements, Propagator};
use crate::physics::gravity::MU_EARTH;
use crate::sim::clock::DEFAULT_MAX_FRAME_DT;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial orbit.
    pub orbit: OrbitConfig,
    /// Frame loop settings.
    pub sim: SimConfig,
    /// Default tracing filter (e.g. "info", "orbit_sim=debug").
    pub log_level: String,
}

/// Initial orbit: the five elements (angles in degrees), starting mean
/// anomaly and the central body's gravitational parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    pub elements: OrbitalElements,
    pub mean_anomaly_deg: f64,
    pub mu: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f64,              // raw frame delta, time units
    pub duration: f64,        // simulation time to cover
    pub time_multiplier: f64, // [0.1, 100]
    pub max_frame_dt: f64,    // raw deltas are capped here before scaling
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::default(),
            sim: SimConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            elements: OrbitalElements::default(),
            mean_anomaly_deg: 0.0,
            mu: MU_EARTH,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,          // 60 fps frame loop
            duration: 2.0,           // ~5 default orbits
            time_multiplier: 1.0,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
        }
    }
}

impl OrbitConfig {
    /// Build a propagator; out-of-range values go through the fail-soft setters.
    pub fn build(&self) -> Propagator {
        let mut prop = Propagator::from_elements(&self.elements, self.mu);
        let _ = prop.set_mean_anomaly(self.mean_anomaly_deg.to_radians());
        prop
    }
}

impl Config {
    /// Load from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = ron::from_str(&text).map_err(ConfigError::ParseError)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save as pretty-printed RON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(ConfigError::SerializeError)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }
        std::fs::write(path, text).map_err(ConfigError::WriteError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("orbit.ron");
        let mut config = Config::default();
        config.orbit.elements.ecc = 0.6;
        config.sim.time_multiplier = 25.0;
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orbit.ron");
        std::fs::write(&path, "(sim: (duration: 10.0))").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.sim.duration, 10.0);
        assert_eq!(config.sim.dt, SimConfig::default().dt);
        assert_eq!(config.orbit, OrbitConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ron");
        std::fs::write(&path, "(orbit: [").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn build_applies_validation() {
        let orbit = OrbitConfig {
            elements: OrbitalElements { sma: 15.0, ecc: 3.0, inc: 45.0, argp: -90.0, raan: 0.0 },
            mean_anomaly_deg: 90.0,
            mu: -1.0,
        };
        let prop = orbit.build();
        assert_eq!(prop.semimajor_axis(), 15.0);
        assert_eq!(prop.eccentricity(), 0.99);
        assert_relative_eq!(prop.argument_of_periapsis(), 270.0, epsilon = 1e-12);
        assert_relative_eq!(prop.mean_anomaly(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(prop.mu(), MU_EARTH);
    }
}
