//! Geometry of the band of the viewport a section has to enter before it
//! counts as visible.

use serde::{Deserialize, Serialize};

/// A measured region, in CSS pixels relative to the top of the viewport
/// (what `getBoundingClientRect` reports).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// True when any part of the region is on screen.
    pub fn is_on_screen(&self, viewport_height: f64) -> bool {
        self.height > 0.0 && self.top < viewport_height && self.bottom() > 0.0
    }
}

/// The viewport shrunk by a fixed inset at the top (the nav bar) and a
/// fraction of the height at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportBand {
    pub top_inset_px: f64,
    pub bottom_inset_fraction: f64,
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top_inset_px: 120.0,
            bottom_inset_fraction: 0.35,
        }
    }
}

impl ViewportBand {
    /// Top and bottom edge of the band for the given viewport height.
    /// The band never inverts; on tiny viewports it collapses to a line.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        let height = viewport_height.max(0.0);
        let top = self.top_inset_px.clamp(0.0, height);
        let bottom = (height * (1.0 - self.bottom_inset_fraction)).max(top);
        (top, bottom)
    }

    /// Visibility of `region` in `[0, 1]`.
    ///
    /// This is the larger of the share of the region inside the band and
    /// the share of the band the region covers, so a section taller than
    /// the band still reaches full visibility while it fills the band.
    pub fn visibility(&self, region: Region, viewport_height: f64) -> f64 {
        if region.height.is_nan() || region.height <= 0.0 {
            return 0.0;
        }
        let (top, bottom) = self.bounds(viewport_height);
        let overlap = (bottom.min(region.bottom()) - top.max(region.top)).max(0.0);
        let of_region = overlap / region.height;
        let band_height = bottom - top;
        let of_band = if band_height > 0.0 {
            overlap / band_height
        } else {
            0.0
        };
        of_region.max(of_band).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn band_bounds_follow_insets() {
        let band = ViewportBand::default();
        assert_eq!(band.bounds(VIEWPORT), (120.0, 650.0));
    }

    #[test]
    fn band_collapses_instead_of_inverting() {
        let band = ViewportBand::default();
        let (top, bottom) = band.bounds(100.0);
        assert_eq!(top, 100.0);
        assert_eq!(bottom, 100.0);
    }

    #[test]
    fn region_fully_inside_band_is_fully_visible() {
        let band = ViewportBand::default();
        let ratio = band.visibility(Region::new(200.0, 300.0), VIEWPORT);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn region_outside_band_is_invisible() {
        let band = ViewportBand::default();
        assert_eq!(band.visibility(Region::new(700.0, 400.0), VIEWPORT), 0.0);
        assert_eq!(band.visibility(Region::new(-500.0, 400.0), VIEWPORT), 0.0);
    }

    #[test]
    fn tall_region_filling_band_counts_as_visible() {
        let band = ViewportBand::default();
        let ratio = band.visibility(Region::new(-400.0, 3000.0), VIEWPORT);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn partial_overlap_uses_larger_share() {
        let band = ViewportBand::default();
        // overlap 120..320 = 200px; region 400px -> 0.5, band 530px -> ~0.377
        let ratio = band.visibility(Region::new(-80.0, 400.0), VIEWPORT);
        assert!((ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_regions_are_invisible() {
        let band = ViewportBand::default();
        assert_eq!(band.visibility(Region::new(200.0, 0.0), VIEWPORT), 0.0);
        assert_eq!(band.visibility(Region::new(200.0, f64::NAN), VIEWPORT), 0.0);
    }

    #[test]
    fn on_screen_check() {
        assert!(Region::new(900.0, 200.0).is_on_screen(VIEWPORT));
        assert!(!Region::new(1000.0, 200.0).is_on_screen(VIEWPORT));
        assert!(!Region::new(-200.0, 200.0).is_on_screen(VIEWPORT));
    }
}
