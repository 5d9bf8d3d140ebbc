pub mod elements;
pub mod frame;
pub mod kepler;
pub mod propagator;

pub use elements::{Edit, OrbitalElements};
pub use kepler::{solve_kepler, KeplerSolution};
pub use propagator::Propagator;
