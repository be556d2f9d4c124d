//! Frame timing
//!
//! `FrameTimer` turns a monotonic clock into per-frame deltas. `FixedStep`
//! optionally slices those deltas into constant simulation steps.

#[cfg(test)]
use std::cell::Cell;
use std::time::Instant;

/// Monotonic time source
pub trait Clock {
    /// Whole milliseconds since some fixed origin; never decreases
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by `Instant`, origin at construction
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-advanced clock for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `secs`, rounded to the nearest millisecond
    pub fn advance(&self, secs: f32) {
        self.advance_millis((secs * 1000.0).round() as u64);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

/// Delta between consecutive samples of a clock
///
/// Samples stay in whole milliseconds; only the difference becomes seconds.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    previous: u64,
}

impl FrameTimer {
    /// Start measuring from the clock's origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call (or since the origin on the first call)
    pub fn delta(&mut self, clock: &impl Clock) -> f32 {
        let now = clock.now_millis();
        let elapsed = now.saturating_sub(self.previous);
        self.previous = now;
        elapsed as f32 / 1000.0
    }
}

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    pub step: f32,
    pub max_substeps: u32,
    accumulator: f32,
}

impl FixedStep {
    /// `step` must be positive and `max_substeps` non-zero; settings are
    /// validated on load.
    pub fn new(step: f32, max_substeps: u32) -> Self {
        debug_assert!(step > 0.0 && max_substeps > 0);
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Bank `frame_dt` and return how many steps to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let cap = self.step * self.max_substeps as f32;
        let frame_dt = if frame_dt > cap {
            log::warn!(
                "Frame took {:.1}ms - capping to {:.1}ms",
                frame_dt * 1000.0,
                cap * 1000.0
            );
            cap
        } else {
            frame_dt
        };
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timer_deltas() {
        let clock = ManualClock::new();
        let mut timer = FrameTimer::new();

        clock.advance(0.5);
        assert!((timer.delta(&clock) - 0.5).abs() < 1e-6);

        clock.advance(0.25);
        assert!((timer.delta(&clock) - 0.25).abs() < 1e-6);

        // No time passed
        assert_eq!(timer.delta(&clock), 0.0);
    }

    #[test]
    fn test_frame_timer_keeps_millis_after_hours() {
        let clock = ManualClock::new();
        let mut timer = FrameTimer::new();
        clock.advance_millis(5 * 60 * 60 * 1000);
        timer.delta(&clock);

        clock.advance_millis(16);
        assert!((timer.delta(&clock) - 0.016).abs() < 1e-6);
        clock.advance_millis(1);
        assert!((timer.delta(&clock) - 0.001).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(b >= a);
    }

    #[test]
    fn test_fixed_step_accumulates() {
        let mut fixed = FixedStep::new(0.1, 8);
        assert_eq!(fixed.advance(0.05), 0);
        assert_eq!(fixed.advance(0.06), 1);
        assert_eq!(fixed.advance(0.3), 3);
    }

    #[test]
    fn test_fixed_step_caps_long_frames() {
        let mut fixed = FixedStep::new(0.25, 4);
        assert_eq!(fixed.advance(5.0), 4);
        // The excess was dropped, not banked
        assert_eq!(fixed.advance(0.0), 0);
    }
}
