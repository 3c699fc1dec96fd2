//! Tracks which page section is active from measured visibility.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::viewport::ViewportBand;

/// Anything that can be told how visible a region currently is.
///
/// The browser side measures regions however it likes (bounding rects on
/// scroll, an intersection observer, a test fixture) and reports here.
pub trait VisibilityObserver {
    fn report_visibility(&mut self, region_id: &str, ratio: f64);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub order: usize,
}

impl Section {
    /// Navigation label: the id with its first letter upper-cased.
    pub fn label(&self) -> String {
        label_for(self.id)
    }
}

pub fn label_for(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Visibility a section needs before it can become active.
    pub threshold: f64,
    pub band: ViewportBand,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: 0.45,
            band: ViewportBand::default(),
        }
    }
}

/// What the navigation bar renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active: &'static str,
}

/// Resolves the active section from the latest ratio reported per section.
///
/// Among sections at or above the threshold the highest ratio wins and
/// ties go to the section earlier on the page, so the result depends only
/// on the reported ratios and never on the order reports arrive in. When
/// nothing qualifies the previous active section stays.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Section>,
    ratios: Vec<f64>,
    active: usize,
    threshold: f64,
}

impl SectionTracker {
    pub fn new(ids: &[&'static str], threshold: f64) -> Result<Self, TrackerError> {
        if ids.is_empty() {
            return Err(TrackerError::NoSections);
        }
        let mut sections: Vec<Section> = Vec::with_capacity(ids.len());
        for (order, &id) in ids.iter().enumerate() {
            if sections.iter().any(|s| s.id == id) {
                return Err(TrackerError::DuplicateSection(id.to_string()));
            }
            sections.push(Section { id, order });
        }
        Ok(Self {
            ratios: vec![0.0; sections.len()],
            sections,
            active: 0,
            threshold,
        })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active_id(&self) -> &'static str {
        self.sections[self.active].id
    }

    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            active: self.active_id(),
        }
    }

    #[cfg(test)]
    fn ratio(&self, id: &str) -> Option<f64> {
        self.position(id).map(|idx| self.ratios[idx])
    }

    /// Records a ratio and re-resolves. Returns true when the active
    /// section changed.
    pub fn observe(&mut self, id: &str, ratio: f64) -> bool {
        let Some(idx) = self.position(id) else {
            log::debug!("ignoring visibility for unknown section `{}`", id);
            return false;
        };
        self.ratios[idx] = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self.resolve()
    }

    /// A region that is not mounted yet simply counts as invisible.
    pub fn mark_missing(&mut self, id: &str) -> bool {
        self.observe(id, 0.0)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    fn resolve(&mut self) -> bool {
        let mut best: Option<usize> = None;
        for (idx, ratio) in self.ratios.iter().enumerate() {
            if *ratio < self.threshold {
                continue;
            }
            match best {
                Some(current) if self.ratios[current] >= *ratio => {}
                _ => best = Some(idx),
            }
        }

        match best {
            Some(idx) if idx != self.active => {
                log::debug!(
                    "active section {} -> {}",
                    self.sections[self.active].id,
                    self.sections[idx].id
                );
                self.active = idx;
                true
            }
            _ => false,
        }
    }
}

impl VisibilityObserver for SectionTracker {
    fn report_visibility(&mut self, region_id: &str, ratio: f64) {
        self.observe(region_id, ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Region;
    use pretty_assertions::assert_eq;

    const IDS: [&str; 5] = ["home", "about", "services", "team", "contact"];

    fn tracker() -> SectionTracker {
        SectionTracker::new(&IDS, 0.45).unwrap()
    }

    #[test]
    fn starts_on_first_section() {
        assert_eq!(tracker().active_id(), "home");
    }

    #[test]
    fn rejects_empty_and_duplicate_sets() {
        assert_eq!(
            SectionTracker::new(&[], 0.45).unwrap_err(),
            TrackerError::NoSections
        );
        assert_eq!(
            SectionTracker::new(&["home", "home"], 0.45).unwrap_err(),
            TrackerError::DuplicateSection("home".to_string())
        );
    }

    #[test]
    fn section_above_threshold_becomes_active() {
        let mut t = tracker();
        assert!(t.observe("about", 0.6));
        assert_eq!(t.active_id(), "about");
        assert_eq!(t.navigation(), NavigationState { active: "about" });
    }

    #[test]
    fn below_threshold_keeps_previous() {
        let mut t = tracker();
        t.observe("services", 0.9);
        t.observe("services", 0.1);
        t.observe("team", 0.3);
        assert_eq!(t.active_id(), "services");
    }

    #[test]
    fn highest_ratio_wins_regardless_of_report_order() {
        let mut a = tracker();
        a.observe("about", 0.5);
        a.observe("services", 0.8);

        let mut b = tracker();
        b.observe("services", 0.8);
        b.observe("about", 0.5);

        assert_eq!(a.active_id(), "services");
        assert_eq!(b.active_id(), "services");
    }

    #[test]
    fn ties_go_to_earlier_section() {
        let mut t = tracker();
        t.observe("team", 0.7);
        t.observe("about", 0.7);
        assert_eq!(t.active_id(), "about");

        let mut t = tracker();
        t.observe("about", 0.7);
        t.observe("team", 0.7);
        assert_eq!(t.active_id(), "about");
    }

    #[test]
    fn unknown_and_missing_regions_are_harmless() {
        let mut t = tracker();
        t.observe("about", 0.9);
        assert!(!t.observe("pricing", 1.0));
        t.mark_missing("contact");
        assert_eq!(t.active_id(), "about");
        assert_eq!(t.ratio("contact"), Some(0.0));
        assert_eq!(t.ratio("pricing"), None);
    }

    #[test]
    fn bad_ratios_are_clamped() {
        let mut t = tracker();
        t.observe("team", f64::NAN);
        assert_eq!(t.ratio("team"), Some(0.0));
        t.observe("team", 4.0);
        assert_eq!(t.ratio("team"), Some(1.0));
        assert_eq!(t.active_id(), "team");
    }

    #[test]
    fn active_is_always_a_known_section() {
        let mut t = tracker();
        let reports = [
            ("contact", 0.2),
            ("nope", 1.0),
            ("about", 0.46),
            ("home", 0.0),
            ("services", 0.99),
            ("services", 0.0),
            ("team", 0.45),
        ];
        for (id, ratio) in reports {
            t.report_visibility(id, ratio);
            assert!(IDS.contains(&t.active_id()));
        }
        assert_eq!(t.active_id(), "about");
    }

    #[test]
    fn labels_are_capitalised() {
        let t = tracker();
        let labels: Vec<String> = t.sections().iter().map(Section::label).collect();
        assert_eq!(labels, vec!["Home", "About", "Services", "Team", "Contact"]);
        assert_eq!(label_for(""), "");
    }

    /// Section heights on a 900px-tall viewport, stacked in page order.
    const HEIGHTS: [f64; 5] = [900.0, 1400.0, 800.0, 1100.0, 700.0];
    const VIEWPORT: f64 = 900.0;

    fn regions_at(scroll_y: f64) -> Vec<Region> {
        let mut offset = 0.0;
        HEIGHTS
            .iter()
            .map(|height| {
                let region = Region::new(offset - scroll_y, *height);
                offset += height;
                region
            })
            .collect()
    }

    /// Measures every region at `scroll_y` and feeds the tracker, returning
    /// the ratios it was given.
    fn scroll_to(t: &mut SectionTracker, band: &ViewportBand, scroll_y: f64) -> Vec<f64> {
        regions_at(scroll_y)
            .into_iter()
            .zip(IDS)
            .map(|(region, id)| {
                let ratio = band.visibility(region, VIEWPORT);
                t.report_visibility(id, ratio);
                ratio
            })
            .collect()
    }

    fn check_position(t: &SectionTracker, ratios: &[f64], scroll_y: f64) {
        let active = t.active_id();
        assert!(IDS.contains(&active), "unknown section at {scroll_y}");

        let best = ratios.iter().cloned().fold(0.0, f64::max);
        if best >= 0.45 {
            let idx = IDS.iter().position(|id| *id == active).unwrap();
            assert_eq!(ratios[idx], best, "not the most visible at {scroll_y}");
            assert!(
                ratios[..idx].iter().all(|r| *r < best),
                "tie not resolved by page order at {scroll_y}"
            );
            assert!(regions_at(scroll_y)[idx].is_on_screen(VIEWPORT));
        }
    }

    #[test]
    fn scrolling_through_the_page_tracks_the_visible_section() {
        let band = ViewportBand::default();
        let bottom = HEIGHTS.iter().sum::<f64>() - VIEWPORT;
        let mut t = tracker();
        let mut visited = Vec::new();

        let mut y = 0.0;
        while y <= bottom {
            let ratios = scroll_to(&mut t, &band, y);
            check_position(&t, &ratios, y);
            if visited.last() != Some(&t.active_id()) {
                visited.push(t.active_id());
            }
            y += 5.0;
        }
        assert_eq!(visited, IDS.to_vec());
        assert_eq!(t.active_id(), "contact");

        let mut y = bottom;
        while y >= 0.0 {
            let ratios = scroll_to(&mut t, &band, y);
            check_position(&t, &ratios, y);
            y -= 5.0;
        }
        assert_eq!(t.active_id(), "home");
    }
}
