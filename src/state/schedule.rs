//! Timer bookkeeping for animated controllers.
//!
//! Controllers never sleep or spawn timers themselves. Each one owns a
//! `Schedule`, exposes a pure `step()` returning the delay until its next
//! step, and is driven by `State::advance` on every terminal tick.

use std::time::{Duration, Instant};

/// Shortest delay a schedule accepts, so catch-up loops always terminate.
const MIN_DELAY: Duration = Duration::from_millis(1);

/// Next due instant of a single repeating timer.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schedule {
    next_due: Option<Instant>,
}

impl Schedule {
    /// Return a disarmed schedule.
    ///
    pub fn idle() -> Self {
        Schedule { next_due: None }
    }

    /// Arm the schedule to fire `delay` after `from`.
    ///
    pub fn arm(&mut self, from: Instant, delay: Duration) {
        self.next_due = Some(from + delay.max(MIN_DELAY));
    }

    /// Arm the schedule to fire at `at`.
    ///
    pub fn arm_at(&mut self, at: Instant) {
        self.next_due = Some(at);
    }

    /// Disarm the schedule and return the due instant if it has elapsed.
    ///
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = None;
                Some(due)
            }
            _ => None,
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_never_fires() {
        let mut schedule = Schedule::idle();
        assert!(!schedule.is_armed());
        assert_eq!(schedule.fire(Instant::now() + Duration::from_secs(60)), None);
    }

    #[test]
    fn fires_once_when_due() {
        let start = Instant::now();
        let mut schedule = Schedule::idle();
        schedule.arm(start, Duration::from_millis(100));
        assert_eq!(schedule.fire(start + Duration::from_millis(99)), None);
        assert_eq!(
            schedule.fire(start + Duration::from_millis(150)),
            Some(start + Duration::from_millis(100))
        );
        assert!(!schedule.is_armed());
        assert_eq!(schedule.fire(start + Duration::from_millis(200)), None);
    }

    #[test]
    fn zero_delay_is_raised_to_minimum() {
        let start = Instant::now();
        let mut schedule = Schedule::idle();
        schedule.arm(start, Duration::ZERO);
        assert_eq!(schedule.fire(start), None);
        assert!(schedule.fire(start + MIN_DELAY).is_some());
    }

    #[test]
    fn stop_disarms() {
        let start = Instant::now();
        let mut schedule = Schedule::idle();
        schedule.arm_at(start);
        schedule.stop();
        assert_eq!(schedule.fire(start), None);
    }
}
