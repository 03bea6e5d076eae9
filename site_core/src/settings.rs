//! # Site Settings
//!
//! Timings and thresholds for the page behaviors. Defaults match the
//! shipped design; a page can override any subset by embedding JSON:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "toast": { "display_ms": 8000 }, "log_level": "debug" }
//! </script>
//! ```
//!
//! Tier rates and minimums are business constants and live in
//! [`crate::pricing::ServiceTier`], not here.
//!
//! ## Example
//!
//! ```rust
//! use site_core::settings::SiteSettings;
//!
//! let settings = SiteSettings::from_json(r#"{ "navbar": { "hide_after_px": 200.0 } }"#).unwrap();
//! assert_eq!(settings.navbar.hide_after_px, 200.0);
//! assert_eq!(settings.navbar.dense_after_px, 50.0); // untouched fields keep defaults
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SiteError, SiteResult};

/// Element id of the optional embedded settings script
pub const SETTINGS_ELEMENT_ID: &str = "site-config";

/// Root settings container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteSettings {
    pub navbar: NavbarSettings,
    pub reveal: RevealSettings,
    pub toast: ToastSettings,
    pub contact: ContactSettings,
    pub counters: CounterSettings,
    pub parallax: ParallaxSettings,
    pub log_level: LogLevel,
}

/// Header background and auto-hide behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarSettings {
    /// Switch to the denser background past this offset
    pub dense_after_px: f64,
    /// Allow hiding on downward scroll past this offset
    pub hide_after_px: f64,
    pub dense_background: String,
    pub light_background: String,
}

impl Default for NavbarSettings {
    fn default() -> Self {
        NavbarSettings {
            dense_after_px: 50.0,
            hide_after_px: 100.0,
            dense_background: "rgba(10, 10, 10, 0.98)".to_string(),
            light_background: "rgba(10, 10, 10, 0.95)".to_string(),
        }
    }
}

/// Scroll reveal observer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Fraction of the element that must be visible, 0.0 - 1.0
    pub threshold: f64,
    /// CSS margin applied to the viewport when testing intersection
    pub root_margin: String,
    pub revealed_class: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        RevealSettings {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            revealed_class: "aos-animate".to_string(),
        }
    }
}

/// Notification timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    /// Delay between insertion and the entry transition
    pub show_delay_ms: u32,
    /// Time from insertion until the exit transition starts
    pub display_ms: u32,
    /// Length of the exit transition before removal
    pub exit_ms: u32,
}

impl Default for ToastSettings {
    fn default() -> Self {
        ToastSettings {
            show_delay_ms: 100,
            display_ms: 5_000,
            exit_ms: 300,
        }
    }
}

/// Contact form behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// Simulated submission latency
    pub submit_latency_ms: u32,
    pub sending_label: String,
    pub success_message: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        ContactSettings {
            submit_latency_ms: 2_000,
            sending_label: "SENDING...".to_string(),
            success_message: "Message sent successfully! I'll get back to you soon.".to_string(),
        }
    }
}

/// Durations for the animated pricing counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    pub surface_area_ms: u32,
    pub base_price_ms: u32,
    pub total_price_ms: u32,
}

impl Default for CounterSettings {
    fn default() -> Self {
        CounterSettings {
            surface_area_ms: 800,
            base_price_ms: 800,
            total_price_ms: 1_000,
        }
    }
}

/// Mouse-follow offsets for the decorative shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    pub enabled: bool,
    /// Speed added per shape index
    pub speed_step: f64,
    /// Pixel travel at speed 1.0 from center to edge (×0.5)
    pub travel_px: f64,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        ParallaxSettings {
            enabled: true,
            speed_step: 0.02,
            travel_px: 100.0,
        }
    }
}

/// Console log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl SiteSettings {
    /// Parse overrides from JSON and validate the merged result.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let settings: SiteSettings = serde_json::from_str(json)
            .map_err(|e| SiteError::invalid_settings("site-config", e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the components cannot act on.
    pub fn validate(&self) -> SiteResult<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(SiteError::invalid_settings(
                "reveal.threshold",
                format!("{} is outside 0.0 - 1.0", self.reveal.threshold),
            ));
        }
        if self.reveal.revealed_class.trim().is_empty() {
            return Err(SiteError::invalid_settings("reveal.revealed_class", "must not be empty"));
        }
        if self.navbar.dense_after_px < 0.0 || self.navbar.hide_after_px < 0.0 {
            return Err(SiteError::invalid_settings("navbar", "offsets must be non-negative"));
        }
        if self.toast.display_ms < self.toast.show_delay_ms {
            return Err(SiteError::invalid_settings(
                "toast.display_ms",
                "must not be shorter than show_delay_ms",
            ));
        }
        if !self.parallax.speed_step.is_finite() || !self.parallax.travel_px.is_finite() {
            return Err(SiteError::invalid_settings("parallax", "values must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SiteSettings::default().validate().is_ok());
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        assert_eq!(SiteSettings::from_json("{}").unwrap(), SiteSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = SiteSettings::from_json(
            r#"{ "toast": { "display_ms": 8000 }, "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(settings.toast.display_ms, 8_000);
        assert_eq!(settings.toast.exit_ms, 300);
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err = SiteSettings::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(SiteSettings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_serialization() {
        let settings = SiteSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let roundtrip: SiteSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, roundtrip);
    }
}
