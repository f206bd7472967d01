use std::time::{Duration, Instant};

/// Fixed-cadence timer that drives `GameState::tick`. Stopped while paused
/// or after a game over, so the world stays frozen.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Ticker { interval, next_due: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Starts ticking one interval from `now`. A running ticker keeps its
    /// schedule.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Returns true at most once per call when a tick is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.next_due {
            Some(due) if now >= due => due,
            _ => return false,
        };

        let next = due + self.interval;
        // Fell behind by more than a whole interval: resync instead of
        // firing a burst of catch-up ticks.
        self.next_due = Some(if next <= now { now + self.interval } else { next });
        true
    }
}
