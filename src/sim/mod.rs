pub mod clock;
pub mod event;
pub mod runner;

pub use clock::FrameClock;
pub use runner::{simulate, simulate_with, Sample};
