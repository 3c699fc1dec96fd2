use serde::{Deserialize, Serialize};

use crate::carousel::CarouselConfig;
use crate::count_up::CountUpTiming;
use crate::error::ConfigError;
use crate::mail::MailSettings;
use crate::nav::NavBarConfig;
use crate::sections::TrackerConfig;

/// Every tunable of the page. Missing keys fall back to their defaults, so
/// a JSON override only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub tracker: TrackerConfig,
    pub nav: NavBarConfig,
    pub carousel: CarouselConfig,
    pub count_up: CountUpTiming,
    pub mail: MailSettings,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.tracker.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::invalid(
                "tracker.threshold",
                format!("{threshold} is outside (0, 1]"),
            ));
        }
        let bottom = self.tracker.band.bottom_inset_fraction;
        if !(0.0..1.0).contains(&bottom) {
            return Err(ConfigError::invalid(
                "tracker.band.bottom_inset_fraction",
                format!("{bottom} is outside [0, 1)"),
            ));
        }
        non_negative("tracker.band.top_inset_px", self.tracker.band.top_inset_px)?;
        non_negative("nav.hide_delta_px", self.nav.hide_delta_px)?;
        non_negative("nav.hide_after_px", self.nav.hide_after_px)?;
        non_negative("nav.solid_after_px", self.nav.solid_after_px)?;
        non_negative("carousel.swipe_threshold_px", self.carousel.swipe_threshold_px)?;
        positive("carousel.interval_ms", self.carousel.interval_ms)?;
        positive("count_up.step_ms", self.count_up.step_ms)?;
        positive("mail.timeout_ms", self.mail.timeout_ms)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be a non-negative number")))
    }
}

fn positive(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be greater than zero"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.tracker.threshold, 0.45);
        assert_eq!(config.carousel.interval_ms, 5_000);
        assert_eq!(config.count_up.step_ms, 16);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "carousel": { "interval_ms": 5200 },
                "mail": { "service_id": "service_n9" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.carousel.interval_ms, 5_200);
        assert_eq!(config.carousel.swipe_threshold_px, 50.0);
        assert_eq!(config.mail.service_id, "service_n9");
        assert_eq!(config.mail.timeout_ms, 10_000);
        assert_eq!(config.nav, NavBarConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ carousel: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let cases = [
            (r#"{"tracker": {"threshold": 0}}"#, "tracker.threshold"),
            (r#"{"tracker": {"threshold": 1.5}}"#, "tracker.threshold"),
            (
                r#"{"tracker": {"band": {"bottom_inset_fraction": 1.0}}}"#,
                "tracker.band.bottom_inset_fraction",
            ),
            (r#"{"nav": {"hide_delta_px": -1}}"#, "nav.hide_delta_px"),
            (r#"{"carousel": {"interval_ms": 0}}"#, "carousel.interval_ms"),
            (r#"{"count_up": {"step_ms": 0}}"#, "count_up.step_ms"),
            (r#"{"mail": {"timeout_ms": 0}}"#, "mail.timeout_ms"),
        ];
        for (raw, expected) in cases {
            match SiteConfig::from_json(raw) {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }
}
