//! Stat counters that count from zero to their value once they scroll
//! into view.

use serde::{Deserialize, Serialize};

use crate::error::CountUpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountUpTiming {
    pub duration_ms: u32,
    pub step_ms: u32,
}

impl Default for CountUpTiming {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            step_ms: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    increment: f64,
    step_ms: u32,
    current: f64,
    displayed: u64,
    carry_ms: u64,
    phase: Phase,
}

impl CountUp {
    pub fn new(target: u64, timing: CountUpTiming) -> Result<Self, CountUpError> {
        if timing.step_ms == 0 {
            return Err(CountUpError::ZeroStep);
        }
        let steps = (f64::from(timing.duration_ms) / f64::from(timing.step_ms)).max(1.0);
        Ok(Self {
            target,
            increment: target as f64 / steps,
            step_ms: timing.step_ms,
            current: 0.0,
            displayed: 0,
            carry_ms: 0,
            phase: Phase::Idle,
        })
    }

    /// A counter that already shows its target.
    pub fn settled(target: u64) -> Self {
        Self {
            target,
            increment: target as f64,
            step_ms: CountUpTiming::default().step_ms,
            current: target as f64,
            displayed: target,
            carry_ms: 0,
            phase: Phase::Done,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Called when the counter first becomes visible. Only the first call
    /// does anything; returns whether this one did.
    pub fn start(&mut self, reduced_motion: bool) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        if reduced_motion || self.target == 0 {
            self.finish();
        } else {
            self.phase = Phase::Running;
        }
        true
    }

    /// One timer step. Returns true while more steps are needed.
    pub fn step(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finish();
            false
        } else {
            self.displayed = (self.current.floor() as u64).max(self.displayed);
            true
        }
    }

    /// Applies as many whole steps as `elapsed_ms` covers and keeps the
    /// remainder for the next call.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        if self.phase != Phase::Running {
            return self.displayed;
        }
        let step = u64::from(self.step_ms);
        let carried = self.carry_ms + elapsed_ms % step;
        self.carry_ms = carried % step;
        let steps = elapsed_ms / step + carried / step;
        // Ends early once the target is reached.
        for _ in 0..steps {
            if !self.step() {
                break;
            }
        }
        self.displayed
    }

    fn finish(&mut self) {
        self.current = self.target as f64;
        self.displayed = self.target;
        self.carry_ms = 0;
        self.phase = Phase::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn timing(duration_ms: u32, step_ms: u32) -> CountUpTiming {
        CountUpTiming {
            duration_ms,
            step_ms,
        }
    }

    #[test]
    fn reaches_target_exactly_and_never_goes_down() {
        let mut counter = CountUp::new(120, timing(900, 16)).unwrap();
        assert!(counter.start(false));

        let mut seen = vec![counter.displayed()];
        let mut steps = 0;
        while counter.step() {
            seen.push(counter.displayed());
            steps += 1;
            assert!(steps < 1_000, "counter never finished");
        }
        seen.push(counter.displayed());

        assert_eq!(counter.displayed(), 120);
        assert_eq!(counter.phase(), Phase::Done);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.iter().all(|v| *v <= 120));
    }

    #[test]
    fn stays_at_zero_until_started() {
        let mut counter = CountUp::new(50, CountUpTiming::default()).unwrap();
        assert!(!counter.step());
        assert_eq!(counter.advance(10_000), 0);
        assert_eq!(counter.phase(), Phase::Idle);
    }

    #[test]
    fn starts_only_once() {
        let mut counter = CountUp::new(5, CountUpTiming::default()).unwrap();
        assert!(counter.start(false));
        counter.advance(10_000);
        assert_eq!(counter.displayed(), 5);
        assert!(!counter.start(false));
        assert_eq!(counter.displayed(), 5);
        assert_eq!(counter.phase(), Phase::Done);
    }

    #[test]
    fn reduced_motion_shows_target_immediately() {
        let mut counter = CountUp::new(42, CountUpTiming::default()).unwrap();
        counter.start(true);
        assert_eq!(counter.displayed(), 42);
        assert!(!counter.is_running());
    }

    #[test]
    fn zero_target_finishes_on_start() {
        let mut counter = CountUp::new(0, CountUpTiming::default()).unwrap();
        counter.start(false);
        assert_eq!(counter.phase(), Phase::Done);
        assert_eq!(counter.displayed(), 0);
    }

    #[test]
    fn virtual_clock_matches_duration() {
        let mut counter = CountUp::new(100, timing(800, 16)).unwrap();
        counter.start(false);
        let halfway = counter.advance(400);
        assert!(halfway > 0 && halfway < 100, "halfway was {halfway}");
        counter.advance(8);
        counter.advance(8);
        counter.advance(400);
        assert_eq!(counter.displayed(), 100);
        assert_eq!(counter.phase(), Phase::Done);
    }

    #[test]
    fn huge_elapsed_time_does_not_overflow() {
        let mut counter = CountUp::new(120, timing(900, 16)).unwrap();
        counter.start(false);
        assert_eq!(counter.advance(15), 0);
        assert_eq!(counter.advance(u64::MAX), 120);
        assert_eq!(counter.phase(), Phase::Done);
        assert_eq!(counter.advance(u64::MAX), 120);
    }

    #[test]
    fn step_longer_than_duration_counts_in_one_go() {
        let mut counter = CountUp::new(7, timing(10, 16)).unwrap();
        counter.start(false);
        assert!(!counter.step());
        assert_eq!(counter.displayed(), 7);
    }

    #[test]
    fn zero_step_is_rejected() {
        assert_eq!(
            CountUp::new(10, timing(800, 0)).unwrap_err(),
            CountUpError::ZeroStep
        );
    }

    #[test]
    fn settled_counter_is_done() {
        let counter = CountUp::settled(9);
        assert_eq!(counter.displayed(), 9);
        assert!(counter.is_started());
        assert!(!counter.is_running());
    }
}
