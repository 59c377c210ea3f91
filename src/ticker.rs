use std::time::{Duration, Instant};

/// Fixed-cadence tick source for the event loop.
///
/// Key traffic does not speed ticks up: a tick is due only once a full
/// interval has passed since the previous one.
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// How long the loop may block waiting for input
    pub fn timeout(&self) -> Duration {
        self.timeout_at(Instant::now())
    }

    fn timeout_at(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// True once per elapsed interval
    pub fn is_due(&mut self) -> bool {
        self.is_due_at(Instant::now())
    }

    fn is_due_at(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            // Keep the cadence fixed instead of drifting by processing time
            self.last_tick += self.interval;
            if now.saturating_duration_since(self.last_tick) >= self.interval {
                self.last_tick = now;
            }
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_immediately() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(Duration::from_secs(1), start);
        assert!(!ticker.is_due_at(start));
        assert_eq!(ticker.timeout_at(start), Duration::from_secs(1));
    }

    #[test]
    fn test_due_after_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(Duration::from_secs(1), start);

        let later = start + Duration::from_millis(1000);
        assert!(ticker.is_due_at(later));
        // Only once per interval
        assert!(!ticker.is_due_at(later));
    }

    #[test]
    fn test_timeout_shrinks_and_floors_at_zero() {
        let start = Instant::now();
        let ticker = Ticker::starting_at(Duration::from_secs(1), start);

        assert_eq!(
            ticker.timeout_at(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert_eq!(ticker.timeout_at(start + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn test_long_stall_does_not_burst() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(Duration::from_secs(1), start);

        let stalled = start + Duration::from_secs(10);
        assert!(ticker.is_due_at(stalled));
        assert!(!ticker.is_due_at(stalled));
    }
}
