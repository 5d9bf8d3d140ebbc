// ---------------------------------------------------------------------------
// Frame clock: raw wall-clock delta -> clamped, scaled simulation step
// ---------------------------------------------------------------------------

pub const MIN_TIME_MULTIPLIER: f64 = 0.1;
pub const MAX_TIME_MULTIPLIER: f64 = 100.0;
pub const DEFAULT_MAX_FRAME_DT: f64 = 0.1;

/// Turns raw frame deltas into propagator time steps.
///
/// Large deltas (window dragged, debugger paused) are capped before
/// scaling so the satellite never jumps.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    multiplier: f64,
    max_frame_dt: f64,
    elapsed: f64, // accumulated simulation time
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(multiplier: f64, max_frame_dt: f64) -> Self {
        let mut clock = Self {
            multiplier: 1.0,
            max_frame_dt: if max_frame_dt > 0.0 { max_frame_dt } else { DEFAULT_MAX_FRAME_DT },
            elapsed: 0.0,
        };
        clock.set_multiplier(multiplier);
        clock
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Clamped into [0.1, 100]. Non-finite input is ignored.
    pub fn set_multiplier(&mut self, value: f64) {
        if value.is_finite() {
            self.multiplier = value.clamp(MIN_TIME_MULTIPLIER, MAX_TIME_MULTIPLIER);
        }
    }

    pub fn reset_multiplier(&mut self) {
        self.multiplier = 1.0;
    }

    pub fn max_frame_dt(&self) -> f64 {
        self.max_frame_dt
    }

    /// Simulation time accumulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Simulation step for a raw frame delta: clamp to [0, max_frame_dt], then scale.
    pub fn step(&mut self, raw_dt: f64) -> f64 {
        let dt = if raw_dt.is_finite() { raw_dt.clamp(0.0, self.max_frame_dt) } else { 0.0 };
        let scaled = dt * self.multiplier;
        self.elapsed += scaled;
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn stalled_frame_is_capped() {
        let mut clock = FrameClock::default();
        assert_relative_eq!(clock.step(2.5), 0.1);
        assert_relative_eq!(clock.step(0.016), 0.016);
    }

    #[test]
    fn multiplier_scales_after_clamp() {
        let mut clock = FrameClock::new(10.0, 0.1);
        assert_relative_eq!(clock.step(1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(clock.step(0.01), 0.1, epsilon = 1e-12);
        assert_relative_eq!(clock.elapsed(), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn negative_and_nan_deltas_give_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.step(-0.5), 0.0);
        assert_eq!(clock.step(f64::NAN), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn multiplier_bounds() {
        let mut clock = FrameClock::default();
        clock.set_multiplier(1000.0);
        assert_eq!(clock.multiplier(), MAX_TIME_MULTIPLIER);
        clock.set_multiplier(0.0);
        assert_eq!(clock.multiplier(), MIN_TIME_MULTIPLIER);
        clock.set_multiplier(f64::NAN);
        assert_eq!(clock.multiplier(), MIN_TIME_MULTIPLIER);
        clock.reset_multiplier();
        assert_eq!(clock.multiplier(), 1.0);
    }
}
