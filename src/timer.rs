use std::time::{Duration, Instant};

/// Fixed-interval gate for simulation ticks.
///
/// The draw/input loop runs every frame; [`TickTimer::trigger`] decides which
/// of those frames also advance the game.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    last_update: Instant,
}

impl TickTimer {
    /// Starts the timer at `start`; the first tick fires one interval later.
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_update: start,
        }
    }

    /// Returns true when at least one interval has passed since the last
    /// firing, and records `now` as the new reference point.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_update) >= self.interval {
            self.last_update = now;
            return true;
        }

        false
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickTimer;

    const INTERVAL: Duration = Duration::from_millis(200);

    #[test]
    fn does_not_fire_before_interval() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);

        assert!(!timer.trigger(start));
        assert!(!timer.trigger(start + Duration::from_millis(199)));
    }

    #[test]
    fn fires_at_interval_and_rebases_on_firing_reading() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);

        let first = start + Duration::from_millis(250);
        assert!(timer.trigger(first));

        assert!(!timer.trigger(first + Duration::from_millis(150)));
        assert!(timer.trigger(first + INTERVAL));
    }

    #[test]
    fn long_stall_fires_only_once() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);

        let late = start + Duration::from_secs(2);
        assert!(timer.trigger(late));
        assert!(!timer.trigger(late));
    }
}
