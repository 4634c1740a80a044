//! Fixed-step simulation clock.

use web_time::{Duration, Instant};

/// Fixed-step clock: turns variable frame time into a whole number of
/// simulation ticks.
///
/// Leftover time carries into the next frame. At most `max_ticks_per_frame`
/// ticks are produced per call; time beyond that is dropped so a long stall
/// cannot snowball.
pub struct TickClock {
    /// Duration of one tick
    step: Duration,
    /// Time not yet consumed by a tick
    accumulator: Duration,
    /// Last `advance` timestamp
    last_frame: Instant,
    /// Cap on ticks produced per frame
    max_ticks_per_frame: u32,
    /// Ticks produced since creation
    total_ticks: u64,
}

impl TickClock {
    /// Create a clock ticking at `tick_hz` (clamped to at least 1 Hz).
    #[must_use]
    pub fn new(tick_hz: u32) -> Self {
        Self {
            step: Duration::from_nanos(1_000_000_000 / u64::from(tick_hz.max(1))),
            accumulator: Duration::ZERO,
            last_frame: Instant::now(),
            max_ticks_per_frame: 5,
            total_ticks: 0,
        }
    }

    /// Override the per-frame tick cap (at least 1).
    #[must_use]
    pub fn with_max_ticks_per_frame(mut self, max: u32) -> Self {
        self.max_ticks_per_frame = max.max(1);
        self
    }

    /// Seconds per tick, the `dt` handed to the camera.
    #[must_use]
    pub fn step_seconds(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Measure wall time since the last call and return the ticks due.
    pub fn advance(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance_by(elapsed)
    }

    /// Feed `elapsed` frame time and return the ticks due.
    pub fn advance_by(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.step {
            if ticks == self.max_ticks_per_frame {
                log::debug!(
                    "Tick clock behind by {:?}, dropping",
                    self.accumulator
                );
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.step;
            ticks += 1;
        }
        self.total_ticks += u64::from(ticks);
        ticks
    }

    /// Fraction of a tick already accumulated, for interpolating between
    /// the last two camera transforms.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.step.as_secs_f32()
    }

    /// Ticks produced since creation.
    #[must_use]
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_remainder_between_frames() {
        let mut clock = TickClock::new(50);
        assert_eq!(clock.advance_by(Duration::from_millis(30)), 1);
        assert_eq!(clock.advance_by(Duration::from_millis(30)), 2);
        assert_eq!(clock.advance_by(Duration::from_millis(10)), 0);
        assert_eq!(clock.total_ticks(), 3);
        assert!((clock.alpha() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn caps_ticks_after_a_stall() {
        let mut clock = TickClock::new(50).with_max_ticks_per_frame(3);
        assert_eq!(clock.advance_by(Duration::from_secs(2)), 3);
        // The backlog is dropped rather than replayed.
        assert_eq!(clock.advance_by(Duration::ZERO), 0);
    }

    #[test]
    fn step_matches_rate() {
        let clock = TickClock::new(50);
        assert!((clock.step_seconds() - 0.02).abs() < 1e-6);
        assert!((TickClock::new(0).step_seconds() - 1.0).abs() < 1e-6);
    }
}
