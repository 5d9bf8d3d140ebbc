use std::f64::consts::TAU;

// ---------------------------------------------------------------------------
// Central body (scene units, not SI)
// ---------------------------------------------------------------------------

pub const MU_EARTH: f64 = 398_600.0; // gravitational parameter, scene units^3 / time^2
pub const EARTH_RADIUS: f64 = 6.371; // scene units

/// Orbital period from Kepler's third law: T = 2π·sqrt(a³/μ).
pub fn kepler_period(sma: f64, mu: f64) -> f64 {
    TAU * (sma.powi(3) / mu).sqrt()
}

/// Mean motion n = 2π / T (rad per time unit).
pub fn mean_motion(period: f64) -> f64 {
    TAU / period
}

/// True when both the period and the mean motion are finite and positive.
pub fn is_usable_period(period: f64) -> bool {
    period.is_finite() && period > 0.0 && mean_motion(period).is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_orbit_period() {
        let t = kepler_period(12.0, MU_EARTH);
        assert_relative_eq!(t, TAU * (1728.0_f64 / 398_600.0).sqrt(), epsilon = 1e-12);
        assert!((t - 0.4137).abs() < 1e-3, "expected ~0.4137, got {t}");
    }

    #[test]
    fn period_scales_with_three_halves_power() {
        let t1 = kepler_period(10.0, MU_EARTH);
        let t2 = kepler_period(40.0, MU_EARTH);
        // (40/10)^1.5 = 8
        assert_relative_eq!(t2 / t1, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn mean_motion_inverts_period() {
        let t = kepler_period(12.0, MU_EARTH);
        assert_relative_eq!(mean_motion(t) * t, TAU, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_periods_are_unusable() {
        assert!(is_usable_period(kepler_period(12.0, MU_EARTH)));
        // a³ underflows to zero
        assert!(!is_usable_period(kepler_period(1e-120, MU_EARTH)));
        assert!(!is_usable_period(kepler_period(12.0, 0.0)));
        assert!(!is_usable_period(kepler_period(12.0, -1.0)));
        // subnormal period: 2π / T overflows
        assert!(!is_usable_period(1e-310));
    }
}
