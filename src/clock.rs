use std::time::{Duration, Instant};

/// Simulation rate. Everything timer-like in the game counts in these ticks.
pub const FPS: u32 = 60;

/// Fixed-timestep accumulator. Wall-clock time goes in, whole simulation
/// ticks come out; the fractional remainder is carried to the next pass so
/// the simulation rate stays uniform regardless of how jittery the host is.
pub struct FrameClock {
    tick: Duration,
    last: Instant,
    unprocessed: Duration,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            tick: Duration::from_secs(1) / fps,
            last: Instant::now(),
            unprocessed: Duration::ZERO,
        }
    }

    /// Number of simulation ticks that have become due since the last call.
    /// The caller simulates each of them and renders once per drained batch.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        // saturating: a clock that moved backward counts as zero elapsed
        let passed = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(passed)
    }

    /// Accumulator seam used by `ticks_due` and by tests that have no clock.
    pub fn advance(&mut self, passed: Duration) -> u32 {
        self.unprocessed += passed;
        let mut due = 0;
        while self.unprocessed >= self.tick {
            self.unprocessed -= self.tick;
            due += 1;
        }
        due
    }

    #[cfg(test)]
    fn remainder(&self) -> Duration {
        self.unprocessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frame_yields_single_tick() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.advance(Duration::from_millis(20)), 1);
    }

    #[test]
    fn slow_frame_queues_multiple_ticks() {
        // 34ms at 60fps is two whole ticks with ~0.7ms left over
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.advance(Duration::from_micros(34_000)), 2);
        let rem = clock.remainder();
        assert!(rem < Duration::from_secs(1) / 60);
        assert!(rem > Duration::from_micros(600) && rem < Duration::from_micros(800));
    }

    #[test]
    fn remainder_carries_between_frames() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn accumulator_drains_below_one_tick() {
        let mut clock = FrameClock::new(60);
        clock.advance(Duration::from_millis(500));
        assert!(clock.remainder() < Duration::from_secs(1) / 60);
    }

    #[test]
    fn backwards_clock_is_clamped() {
        let mut clock = FrameClock::new(60);
        let t0 = Instant::now();
        clock.ticks_due(t0);
        // same instant again: zero elapsed, never a panic or huge drain
        assert_eq!(clock.ticks_due(t0), 0);
    }
}
