use std::time::{Duration, Instant};

/// Fixed-interval clock driving the simulation from the UI loop.
///
/// Unlike a frame limiter it never sleeps: the caller polls it every frame
/// and asks for a repaint after [`TickTimer::remaining`].
pub struct TickTimer {
    interval: Duration,
    last_tick: Instant,
    interval_smoothed: f64,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
            interval_smoothed: interval.as_secs_f64(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Seconds between the last ticks, smoothed.
    pub fn measured_interval(&self) -> f64 {
        self.interval_smoothed
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.last_tick.elapsed())
    }

    /// Returns `true` and restarts the clock once the interval has elapsed.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    fn poll_at(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return false;
        }
        self.interval_smoothed += (elapsed.as_secs_f64() - self.interval_smoothed) * 0.1;
        self.last_tick = now;
        true
    }
}
