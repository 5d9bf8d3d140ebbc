pub mod physics;
pub mod orbital;
pub mod sim;
pub mod io;
pub mod config;
pub mod cli;
pub mod error;
pub mod logging;

pub use config::{Config, OrbitConfig, SimConfig};
pub use error::{ConfigError, ElementError};
pub use orbital::{Edit, OrbitalElements, Propagator};
