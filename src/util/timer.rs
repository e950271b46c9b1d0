//! One-shot timer for the simulated initial loading delay.

use std::time::{Duration, Instant};

/// Fires once after a delay when polled. Cancelling discards the result.
#[derive(Debug, Clone)]
pub struct OneShotTimer {
    deadline: Instant,
    done: bool,
}

impl OneShotTimer {
    /// Starts a timer at `now`.
    pub fn started_at(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            done: false,
        }
    }

    pub fn new(delay: Duration) -> Self {
        Self::started_at(Instant::now(), delay)
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.done || now < self.deadline {
            return false;
        }
        self.done = true;
        true
    }

    /// Stops the timer without firing.
    pub fn cancel(&mut self) {
        self.done = true;
    }

    /// True until the timer fired or was cancelled.
    pub fn is_pending(&self) -> bool {
        !self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = OneShotTimer::started_at(start, Duration::from_millis(500));
        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(499)));
        assert!(timer.poll(start + Duration::from_millis(500)));
        assert!(!timer.poll(start + Duration::from_secs(2)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = OneShotTimer::started_at(start, Duration::from_millis(10));
        assert!(timer.is_pending());
        timer.cancel();
        assert!(!timer.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn zero_delay_fires_on_first_poll() {
        let start = Instant::now();
        let mut timer = OneShotTimer::started_at(start, Duration::ZERO);
        assert!(timer.poll(start));
    }
}
