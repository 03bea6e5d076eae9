//! # Scroll Effects
//!
//! Navbar appearance driven by scroll position, and the mouse parallax on
//! the decorative shapes.

use serde::{Deserialize, Serialize};

use crate::settings::{NavbarSettings, ParallaxSettings};

/// Header background density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavbarBackground {
    Light,
    Dense,
}

/// Header slide state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavbarVisibility {
    Shown,
    Hidden,
}

impl NavbarVisibility {
    /// CSS transform for this state
    pub fn transform(&self) -> &'static str {
        match self {
            NavbarVisibility::Shown => "translateY(0)",
            NavbarVisibility::Hidden => "translateY(-100%)",
        }
    }
}

/// Styles to apply after a scroll event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarAppearance {
    pub background: NavbarBackground,
    pub visibility: NavbarVisibility,
}

/// Tracks the previous scroll offset between events
#[derive(Debug, Clone)]
pub struct NavbarScroll {
    settings: NavbarSettings,
    last_scroll_y: f64,
}

impl NavbarScroll {
    pub fn new(settings: NavbarSettings, initial_scroll_y: f64) -> Self {
        NavbarScroll {
            settings,
            last_scroll_y: initial_scroll_y,
        }
    }

    /// Recompute both states from the new offset.
    ///
    /// Hidden only while moving down past the hide threshold; any upward
    /// or stationary event shows the header again.
    pub fn on_scroll(&mut self, scroll_y: f64) -> NavbarAppearance {
        let background = if scroll_y > self.settings.dense_after_px {
            NavbarBackground::Dense
        } else {
            NavbarBackground::Light
        };
        let visibility = if scroll_y > self.last_scroll_y && scroll_y > self.settings.hide_after_px {
            NavbarVisibility::Hidden
        } else {
            NavbarVisibility::Shown
        };
        self.last_scroll_y = scroll_y;
        NavbarAppearance { background, visibility }
    }

    /// CSS background value for a density
    pub fn background_css(&self, background: NavbarBackground) -> &str {
        match background {
            NavbarBackground::Light => &self.settings.light_background,
            NavbarBackground::Dense => &self.settings.dense_background,
        }
    }
}

/// Pointer-relative offset for the shape at `index`.
///
/// `pointer_x`/`pointer_y` are fractions of the viewport (0.0 - 1.0); the
/// shape at the center of the screen gets no offset.
pub fn parallax_offset(settings: &ParallaxSettings, index: usize, pointer_x: f64, pointer_y: f64) -> (f64, f64) {
    let speed = (index as f64 + 1.0) * settings.speed_step;
    (
        (pointer_x - 0.5) * speed * settings.travel_px,
        (pointer_y - 0.5) * speed * settings.travel_px,
    )
}

/// Compose a shape's resting transform with its parallax offset.
pub fn parallax_transform(base: &str, offset: (f64, f64)) -> String {
    let translate = format!("translate({}px, {}px)", offset.0, offset.1);
    let base = base.trim();
    if base.is_empty() || base == "none" {
        translate
    } else {
        format!("{} {}", base, translate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navbar() -> NavbarScroll {
        NavbarScroll::new(NavbarSettings::default(), 0.0)
    }

    #[test]
    fn test_background_threshold() {
        let mut nav = navbar();
        assert_eq!(nav.on_scroll(50.0).background, NavbarBackground::Light);
        assert_eq!(nav.on_scroll(51.0).background, NavbarBackground::Dense);
        assert_eq!(nav.background_css(NavbarBackground::Dense), "rgba(10, 10, 10, 0.98)");
    }

    #[test]
    fn test_hides_when_scrolling_down_past_threshold() {
        let mut nav = navbar();
        assert_eq!(nav.on_scroll(80.0).visibility, NavbarVisibility::Shown);
        assert_eq!(nav.on_scroll(100.0).visibility, NavbarVisibility::Shown);
        assert_eq!(nav.on_scroll(150.0).visibility, NavbarVisibility::Hidden);
    }

    #[test]
    fn test_shows_when_scrolling_up_anywhere() {
        let mut nav = navbar();
        nav.on_scroll(2_000.0);
        let appearance = nav.on_scroll(1_990.0);
        assert_eq!(appearance.visibility, NavbarVisibility::Shown);
        assert_eq!(appearance.visibility.transform(), "translateY(0)");
    }

    #[test]
    fn test_stationary_event_shows() {
        let mut nav = navbar();
        nav.on_scroll(500.0);
        assert_eq!(nav.on_scroll(500.0).visibility, NavbarVisibility::Shown);
    }

    #[test]
    fn test_parallax_center_is_zero() {
        let settings = ParallaxSettings::default();
        assert_eq!(parallax_offset(&settings, 0, 0.5, 0.5), (0.0, 0.0));
    }

    #[test]
    fn test_parallax_scales_with_index() {
        let settings = ParallaxSettings::default();
        let (x0, _) = parallax_offset(&settings, 0, 1.0, 0.5);
        let (x2, _) = parallax_offset(&settings, 2, 1.0, 0.5);
        // 0.5 × 0.02 × 100 = 1px, index 2 moves three times as far
        assert!((x0 - 1.0).abs() < 1e-9);
        assert!((x2 - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallax_transform_replaces_offset() {
        assert_eq!(parallax_transform("", (1.0, -2.0)), "translate(1px, -2px)");
        assert_eq!(
            parallax_transform("rotate(45deg)", (0.5, 0.0)),
            "rotate(45deg) translate(0.5px, 0px)"
        );
    }
}
