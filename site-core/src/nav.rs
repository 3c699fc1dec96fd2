//! Navigation bar reaction to scrolling: hide while scrolling down, come
//! back on the way up, switch to the solid style once off the top, and
//! report how far down the page the reader is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavBarConfig {
    /// Minimum movement between two scroll events that counts as a
    /// direction change.
    pub hide_delta_px: f64,
    /// The bar is never hidden above this offset.
    pub hide_after_px: f64,
    /// Offset after which the bar gets its solid background.
    pub solid_after_px: f64,
}

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            hide_delta_px: 8.0,
            hide_after_px: 140.0,
            solid_after_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTransition {
    Hide,
    Reveal,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavBarState {
    hidden: bool,
    scrolled: bool,
    progress: f64,
    last_y: f64,
}

impl NavBarState {
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Scroll progress in percent.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Feeds one scroll event. `scrollable` is document height minus
    /// viewport height. Returns a transition only when visibility flips.
    pub fn on_scroll(
        &mut self,
        config: &NavBarConfig,
        y: f64,
        scrollable: f64,
    ) -> Option<NavTransition> {
        let y = if y.is_nan() { 0.0 } else { y };

        self.progress = if scrollable > 0.0 {
            (y / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.scrolled = y > config.solid_after_px;

        let wants_hidden = if y > self.last_y + config.hide_delta_px && y > config.hide_after_px {
            Some(true)
        } else if y < self.last_y - config.hide_delta_px {
            Some(false)
        } else {
            None
        };
        self.last_y = y;

        match wants_hidden {
            Some(hide) if hide != self.hidden => {
                self.hidden = hide;
                Some(if hide {
                    NavTransition::Hide
                } else {
                    NavTransition::Reveal
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scroll_all(state: &mut NavBarState, offsets: &[f64]) -> Vec<NavTransition> {
        let config = NavBarConfig::default();
        offsets
            .iter()
            .filter_map(|y| state.on_scroll(&config, *y, 4000.0))
            .collect()
    }

    #[test]
    fn one_hide_per_downward_run() {
        let mut state = NavBarState::default();
        let run: Vec<f64> = (1..=40).map(|i| i as f64 * 30.0).collect();
        let transitions = scroll_all(&mut state, &run);
        assert_eq!(transitions, vec![NavTransition::Hide]);
        assert!(state.hidden());
    }

    #[test]
    fn reveal_on_scroll_up() {
        let mut state = NavBarState::default();
        scroll_all(&mut state, &[200.0, 400.0, 600.0]);
        let transitions = scroll_all(&mut state, &[580.0, 560.0, 540.0, 300.0]);
        assert_eq!(transitions, vec![NavTransition::Reveal]);
        assert!(!state.hidden());
    }

    #[test]
    fn never_hides_near_top() {
        let mut state = NavBarState::default();
        let transitions = scroll_all(&mut state, &[20.0, 60.0, 100.0, 135.0]);
        assert!(transitions.is_empty());
        assert!(!state.hidden());
    }

    #[test]
    fn small_moves_are_ignored() {
        let mut state = NavBarState::default();
        scroll_all(&mut state, &[500.0]);
        assert!(state.hidden());
        let transitions = scroll_all(&mut state, &[495.0, 490.0, 486.0, 493.0]);
        assert!(transitions.is_empty());
        assert!(state.hidden());
    }

    #[test]
    fn progress_and_solid_style() {
        let config = NavBarConfig::default();
        let mut state = NavBarState::default();
        state.on_scroll(&config, 30.0, 3000.0);
        assert!(!state.scrolled());
        state.on_scroll(&config, 1500.0, 3000.0);
        assert!(state.scrolled());
        assert_eq!(state.progress(), 50.0);
        state.on_scroll(&config, 3200.0, 3000.0);
        assert_eq!(state.progress(), 100.0);
        state.on_scroll(&config, 10.0, 0.0);
        assert_eq!(state.progress(), 0.0);
    }
}
