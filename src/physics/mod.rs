pub mod gravity;

pub use gravity::{is_usable_period, kepler_period, mean_motion, EARTH_RADIUS, MU_EARTH};
