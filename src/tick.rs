use std::time::{Duration, Instant};

/// Fixed-interval gate deciding when a gameplay tick is due.
///
/// The render loop runs at frame rate regardless; this only compares a
/// stored timestamp against a monotonic clock. It never sleeps.
#[derive(Debug, Clone, Copy)]
pub struct TickGate {
    interval: Duration,
    last_tick: Instant,
}

impl TickGate {
    /// Creates a gate whose first tick is due `interval` from now.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    /// Admits a tick when at least the interval has elapsed since the last
    /// accepted one, and records `now` as the new reference point.
    pub fn ready(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickGate;

    #[test]
    fn gate_admits_only_at_interval_boundaries() {
        let mut gate = TickGate::new(Duration::from_millis(150));
        let base = Instant::now();

        // Far enough past construction to be due no matter how slowly the
        // test runner got here.
        assert!(gate.ready(base + Duration::from_millis(200)));

        // 50ms after the accepted tick: not due.
        assert!(!gate.ready(base + Duration::from_millis(250)));

        // 150ms after the accepted tick: due again.
        assert!(gate.ready(base + Duration::from_millis(350)));
    }

    #[test]
    fn rejected_polls_do_not_move_the_reference_point() {
        let mut gate = TickGate::new(Duration::from_millis(100));
        let base = Instant::now();

        assert!(gate.ready(base + Duration::from_millis(100)));
        assert!(!gate.ready(base + Duration::from_millis(150)));
        assert!(!gate.ready(base + Duration::from_millis(199)));

        // Due relative to the tick accepted at +100, not the later polls.
        assert!(gate.ready(base + Duration::from_millis(200)));
    }
}
