use std::time::{Duration, Instant};

/// Fixed-interval tick source.
///
/// Callers pass the current time in, which keeps the timer deterministic in
/// tests. Once stopped it never reports a due tick again.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    last_tick: Instant,
    stopped: bool,
}

impl TickTimer {
    /// Creates a timer whose first tick is due one interval after `start`.
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_tick: start,
            stopped: false,
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        !self.stopped && now.saturating_duration_since(self.last_tick) >= self.interval
    }

    /// Records that a tick was delivered at `now`.
    pub fn mark_ticked(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Time left until the next tick, or `None` once stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if self.stopped {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.last_tick);
        Some(self.interval.saturating_sub(elapsed))
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
