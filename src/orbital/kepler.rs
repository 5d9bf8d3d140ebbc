//! Kepler's equation M = E - e·sin(E), solved for the eccentric anomaly.

use std::f64::consts::PI;

pub const MAX_ITERATIONS: usize = 20;
pub const TOLERANCE: f64 = 1e-8;

/// Above this eccentricity the iteration starts from E = π instead of E = M.
/// Starting at M overshoots badly near periapsis for e close to 1.
const HIGH_ECC_GUESS: f64 = 0.8;

/// Result of a bounded Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64, // rad
    pub iterations: usize,
    /// False when the iteration cap was hit before the step fell below tolerance.
    /// `eccentric_anomaly` then holds the last iterate.
    pub converged: bool,
}

impl KeplerSolution {
    /// |E - e·sin(E) - M|
    pub fn residual(&self, mean_anom: f64, ecc: f64) -> f64 {
        let e_anom = self.eccentric_anomaly;
        (e_anom - ecc * e_anom.sin() - mean_anom).abs()
    }
}

/// Solve Kepler's equation by Newton-Raphson.
///
/// `mean_anom` in radians, `ecc` in [0, 1). Deterministic for a given
/// `(mean_anom, ecc)` pair; never fails, but reports whether the tolerance
/// was reached within [`MAX_ITERATIONS`].
pub fn solve_kepler(mean_anom: f64, ecc: f64) -> KeplerSolution {
    let mut e_anom = if ecc < HIGH_ECC_GUESS { mean_anom } else { PI };

    for i in 0..MAX_ITERATIONS {
        let f = e_anom - ecc * e_anom.sin() - mean_anom;
        let f_prime = 1.0 - ecc * e_anom.cos();
        let step = f / f_prime;
        e_anom -= step;

        if step.abs() < TOLERANCE {
            return KeplerSolution {
                eccentric_anomaly: e_anom,
                iterations: i + 1,
                converged: true,
            };
        }
    }

    KeplerSolution {
        eccentric_anomaly: e_anom,
        iterations: MAX_ITERATIONS,
        converged: false,
    }
}

/// True anomaly from eccentric anomaly, full-quadrant via atan2.
pub fn true_anomaly(e_anom: f64, ecc: f64) -> f64 {
    let half = e_anom / 2.0;
    2.0 * ((1.0 + ecc).sqrt() * half.sin()).atan2((1.0 - ecc).sqrt() * half.cos())
}
