//! Animated statistics counters.

use super::schedule::Schedule;
use std::time::{Duration, Instant};

/// Fraction of a counter that must be visible before it starts counting.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// A single counter ascending from zero to its target once it is seen.
///
#[derive(Debug, Clone)]
pub struct Counter {
    label: String,
    target: u64,
    current: f64,
    increment: f64,
    interval: Duration,
    triggered: bool,
    finished: bool,
    schedule: Schedule,
}

impl Counter {
    pub fn new(label: &str, target: u64, duration: Duration, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        let ticks = (duration.as_secs_f64() / interval.as_secs_f64()).max(1.0);
        Counter {
            label: label.to_string(),
            target,
            current: 0.0,
            increment: target as f64 / ticks,
            interval,
            triggered: false,
            finished: false,
            schedule: Schedule::idle(),
        }
    }

    /// Report how much of the counter is visible. The first report at or
    /// above the threshold starts the animation; later reports are ignored.
    /// Returns true if this call started it.
    ///
    pub fn observe(&mut self, visible_ratio: f64, now: Instant) -> bool {
        if self.triggered || visible_ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        self.triggered = true;
        self.schedule.arm(now, self.interval);
        true
    }

    /// Advance by one interval and return the displayed value.
    ///
    pub fn step(&mut self) -> u64 {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.finished = true;
        }
        self.displayed()
    }

    /// Run every tick that has come due by `now`. Returns true if the
    /// displayed value may have changed.
    ///
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(due) = self.schedule.fire(now) {
            self.step();
            changed = true;
            if self.finished {
                break;
            }
            self.schedule.arm(due, self.interval);
        }
        changed
    }

    pub fn stop(&mut self) {
        self.schedule.stop();
    }

    /// Value shown to the reader, never fractional.
    ///
    pub fn displayed(&self) -> u64 {
        self.current.floor() as u64
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// All counters of the page.
///
#[derive(Debug, Clone, Default)]
pub struct StatsCounter {
    counters: Vec<Counter>,
}

impl StatsCounter {
    pub fn new(counters: Vec<Counter>) -> Self {
        StatsCounter { counters }
    }

    /// Report the visible ratio of the counter row, shared by every counter.
    ///
    pub fn observe(&mut self, visible_ratio: f64, now: Instant) {
        for counter in self.counters.iter_mut() {
            counter.observe(visible_ratio, now);
        }
    }

    pub fn advance(&mut self, now: Instant) -> bool {
        self.counters
            .iter_mut()
            .fold(false, |changed, counter| counter.advance(now) || changed)
    }

    pub fn stop(&mut self) {
        self.counters.iter_mut().for_each(Counter::stop);
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(target: u64) -> Counter {
        Counter::new(
            "Projects",
            target,
            Duration::from_millis(2000),
            Duration::from_millis(16),
        )
    }

    #[test]
    fn counts_up_to_exact_target() {
        let mut counter = counter(100);
        let mut previous = 0;
        let mut ticks = 0;
        while !counter.is_finished() {
            let shown = counter.step();
            assert!(shown >= previous);
            assert!(shown <= 100);
            previous = shown;
            ticks += 1;
            assert!(ticks <= 200, "counter never finished");
        }
        assert_eq!(counter.displayed(), 100);
        assert!((125..=126).contains(&ticks));
    }

    #[test]
    fn stays_at_target_after_finishing() {
        let mut counter = counter(7);
        for _ in 0..300 {
            counter.step();
        }
        assert_eq!(counter.displayed(), 7);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = counter(0);
        assert_eq!(counter.step(), 0);
        assert!(counter.is_finished());
    }

    #[test]
    fn triggers_only_at_half_visibility() {
        let now = Instant::now();
        let mut counter = counter(100);
        assert!(!counter.observe(0.49, now));
        assert!(!counter.is_triggered());
        assert!(counter.observe(0.5, now));
        assert!(counter.is_triggered());
    }

    #[test]
    fn triggers_at_most_once() {
        let start = Instant::now();
        let mut counter = counter(100);
        counter.observe(1.0, start);
        counter.advance(start + Duration::from_millis(160));
        let shown = counter.displayed();
        assert!(shown > 0);

        counter.observe(0.0, start + Duration::from_millis(170));
        assert!(!counter.observe(1.0, start + Duration::from_millis(170)));
        counter.advance(start + Duration::from_millis(170));
        assert!(counter.displayed() >= shown);
    }

    #[test]
    fn advance_reaches_target_after_duration() {
        let start = Instant::now();
        let mut counter = counter(100);
        assert!(!counter.advance(start + Duration::from_secs(5)));
        counter.observe(0.8, start);
        assert!(counter.advance(start + Duration::from_millis(3000)));
        assert!(counter.is_finished());
        assert_eq!(counter.displayed(), 100);
        assert!(!counter.advance(start + Duration::from_millis(4000)));
    }

    #[test]
    fn stats_counter_shares_visibility() {
        let start = Instant::now();
        let mut stats = StatsCounter::new(vec![counter(10), counter(20)]);
        stats.observe(0.6, start);
        assert!(stats.counters().iter().all(Counter::is_triggered));
        stats.advance(start + Duration::from_secs(3));
        let shown: Vec<u64> = stats.counters().iter().map(Counter::displayed).collect();
        assert_eq!(shown, vec![10, 20]);
    }

    #[test]
    fn stop_halts_counting() {
        let start = Instant::now();
        let mut stats = StatsCounter::new(vec![counter(100)]);
        stats.observe(1.0, start);
        stats.stop();
        assert!(!stats.advance(start + Duration::from_secs(3)));
        assert_eq!(stats.counters()[0].displayed(), 0);
    }
}
