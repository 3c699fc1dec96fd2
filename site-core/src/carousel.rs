//! Hero carousel scheduler.
//!
//! The carousel runs unless something holds it: the pointer hovering the
//! card, a drag in progress, or keyboard focus inside it. Holds stack, so
//! leaving with the pointer while still focused keeps it paused. Whenever
//! it starts running again the interval restarts from zero.

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

pub const DEFAULT_INTERVAL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u32,
    /// Horizontal distance a drag must cover to count as a swipe.
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            swipe_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    Pointer,
    Drag,
    Focus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Keyboard mapping used by the carousel card.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Previous),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Holds {
    pointer: bool,
    drag: bool,
    focus: bool,
}

impl Holds {
    fn slot(&mut self, reason: PauseReason) -> &mut bool {
        match reason {
            PauseReason::Pointer => &mut self.pointer,
            PauseReason::Drag => &mut self.drag,
            PauseReason::Focus => &mut self.focus,
        }
    }

    fn any(&self) -> bool {
        self.pointer || self.drag || self.focus
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval_ms: u32,
    elapsed_ms: u64,
    holds: Holds,
    epoch: u64,
}

impl Default for Carousel {
    /// A single-slide carousel; used when real slides can't be set up.
    fn default() -> Self {
        Self {
            len: 1,
            index: 0,
            interval_ms: DEFAULT_INTERVAL_MS,
            elapsed_ms: 0,
            holds: Holds::default(),
            epoch: 0,
        }
    }
}

impl Carousel {
    pub fn new(len: usize, interval_ms: u32) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        if interval_ms == 0 {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            len,
            interval_ms,
            ..Self::default()
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn mode(&self) -> Mode {
        if self.holds.any() {
            Mode::Paused
        } else {
            Mode::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.mode() == Mode::Running
    }

    /// Bumped every time the interval restarts. A host timer keyed on
    /// `(is_running, epoch)` is replaced exactly when it should be.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Adds a hold. Returns true if this paused a running carousel.
    pub fn pause(&mut self, reason: PauseReason) -> bool {
        let was_running = self.is_running();
        *self.holds.slot(reason) = true;
        was_running
    }

    /// Releases a hold. Returns true if the carousel started running again,
    /// in which case the interval starts over.
    pub fn resume(&mut self, reason: PauseReason) -> bool {
        let was_running = self.is_running();
        *self.holds.slot(reason) = false;
        if !was_running && self.is_running() {
            self.restart_interval();
            true
        } else {
            false
        }
    }

    /// Lets `elapsed_ms` pass. Returns how many slides were advanced;
    /// always zero while paused.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        if !self.is_running() {
            return 0;
        }
        let interval = u64::from(self.interval_ms);
        // Both terms are below one interval, so the sum can't overflow.
        let carried = self.elapsed_ms + elapsed_ms % interval;
        let steps = elapsed_ms / interval + carried / interval;
        self.elapsed_ms = carried % interval;
        let len = self.len as u64;
        self.index = ((self.index as u64 + steps % len) % len) as usize;
        steps
    }

    /// One timer callback.
    pub fn tick(&mut self) -> bool {
        self.advance(u64::from(self.interval_ms)) > 0
    }

    /// Jumps to `target`, wrapping in both directions. Leaves the mode
    /// alone but restarts the interval.
    pub fn go_to(&mut self, target: isize) {
        self.index = target.rem_euclid(self.len as isize) as usize;
        self.restart_interval();
    }

    pub fn step(&mut self, direction: Direction) {
        let delta = match direction {
            Direction::Previous => -1,
            Direction::Next => 1,
        };
        self.go_to(self.index as isize + delta);
    }

    fn restart_interval(&mut self) {
        self.elapsed_ms = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

/// Turns a press/release pair into a swipe when it moved far enough.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Dragging left shows the next slide, right the previous one.
    pub fn finish(&mut self, x: f64, threshold_px: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        let dx = x - start;
        if dx <= -threshold_px {
            Some(Direction::Next)
        } else if dx >= threshold_px {
            Some(Direction::Previous)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn carousel() -> Carousel {
        Carousel::new(8, 5_000).unwrap()
    }

    #[test]
    fn rejects_bad_setup() {
        assert_eq!(Carousel::new(0, 5_000).unwrap_err(), CarouselError::Empty);
        assert_eq!(Carousel::new(3, 0).unwrap_err(), CarouselError::ZeroInterval);
    }

    #[test]
    fn starts_running_on_first_slide() {
        let c = carousel();
        assert_eq!(c.index(), 0);
        assert_eq!(c.mode(), Mode::Running);
    }

    #[test]
    fn n_ticks_come_back_around() {
        let mut c = carousel();
        c.go_to(3);
        for _ in 0..c.len() {
            assert!(c.tick());
            assert!(c.index() < c.len());
        }
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn advance_accumulates_partial_intervals() {
        let mut c = carousel();
        assert_eq!(c.advance(4_000), 0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.advance(1_000), 1);
        assert_eq!(c.index(), 1);
        assert_eq!(c.advance(12_500), 2);
        assert_eq!(c.index(), 3);
        assert_eq!(c.advance(2_499), 0);
        assert_eq!(c.advance(1), 1);
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn large_jumps_wrap() {
        let mut c = carousel();
        c.advance(5_000 * 8 * 1_000 + 5_000 * 3);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn huge_elapsed_time_does_not_overflow() {
        let mut c = carousel();
        assert_eq!(c.advance(4_999), 0);
        // u64::MAX = 3_689_348_814_741_910 * 5_000 + 1_615, and the carried
        // 4_999 + 1_615 adds one more interval.
        assert_eq!(c.advance(u64::MAX), 3_689_348_814_741_911);
        assert_eq!(c.index(), 7);
        assert_eq!(c.mode(), Mode::Running);
        // 1_614 carried + 1_615 stays below one interval.
        assert_eq!(c.advance(u64::MAX), 3_689_348_814_741_910);
        assert!(c.index() < c.len());
        assert_eq!(c.advance(1_770), 0);
        assert_eq!(c.advance(1), 1);
    }

    #[test]
    fn paused_never_advances() {
        let mut c = carousel();
        assert!(c.pause(PauseReason::Pointer));
        for elapsed in [1, 4_999, 5_000, 60_000, u32::MAX as u64] {
            assert_eq!(c.advance(elapsed), 0);
            assert!(!c.tick());
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn resume_restarts_interval_fresh() {
        let mut c = carousel();
        c.advance(4_900);
        let epoch = c.epoch();
        c.pause(PauseReason::Pointer);
        assert!(c.resume(PauseReason::Pointer));
        assert_eq!(c.epoch(), epoch + 1);
        assert_eq!(c.advance(200), 0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn holds_stack() {
        let mut c = carousel();
        c.pause(PauseReason::Pointer);
        assert!(!c.pause(PauseReason::Focus));
        assert!(!c.resume(PauseReason::Pointer));
        assert_eq!(c.mode(), Mode::Paused);
        assert!(c.resume(PauseReason::Focus));
        assert_eq!(c.mode(), Mode::Running);
    }

    #[test]
    fn resuming_without_hold_is_a_no_op() {
        let mut c = carousel();
        let epoch = c.epoch();
        assert!(!c.resume(PauseReason::Drag));
        assert_eq!(c.epoch(), epoch);
    }

    #[test]
    fn manual_navigation_wraps_and_keeps_mode() {
        let mut c = carousel();
        c.step(Direction::Previous);
        assert_eq!(c.index(), 7);
        c.step(Direction::Next);
        assert_eq!(c.index(), 0);
        c.go_to(-9);
        assert_eq!(c.index(), 7);
        c.go_to(17);
        assert_eq!(c.index(), 1);
        assert_eq!(c.mode(), Mode::Running);

        c.pause(PauseReason::Drag);
        c.step(Direction::Next);
        assert_eq!(c.index(), 2);
        assert_eq!(c.mode(), Mode::Paused);
    }

    #[test]
    fn manual_navigation_restarts_interval() {
        let mut c = carousel();
        c.advance(4_000);
        c.go_to(5);
        assert_eq!(c.advance(4_000), 0);
        assert_eq!(c.index(), 5);
    }

    #[test]
    fn swipe_needs_threshold() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        assert_eq!(swipe.finish(260.0, 50.0), None);
        swipe.begin(300.0);
        assert_eq!(swipe.finish(240.0, 50.0), Some(Direction::Next));
        swipe.begin(300.0);
        assert_eq!(swipe.finish(360.0, 50.0), Some(Direction::Previous));
        assert_eq!(swipe.finish(500.0, 50.0), None);
    }

    #[test]
    fn cancelled_swipe_does_nothing() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(0.0);
        assert!(swipe.is_active());
        swipe.cancel();
        assert_eq!(swipe.finish(-400.0, 50.0), None);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Previous));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("Enter"), None);
    }
}
