//! # Navigation
//!
//! In-page anchor scrolling and the mobile menu.

use serde::{Deserialize, Serialize};

/// Extract the element id from an in-page href.
///
/// Only bare fragments (`#about`) qualify; anything else is left to the
/// browser.
///
/// ```
/// use site_core::navigation::fragment_target;
///
/// assert_eq!(fragment_target("#pricing"), Some("pricing"));
/// assert_eq!(fragment_target("#"), None);
/// assert_eq!(fragment_target("/blog"), None);
/// ```
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return None;
    }
    Some(id)
}

/// Document offset that puts a section's top just below the fixed header.
///
/// `rect_top` is the section's viewport-relative top, `page_y_offset` the
/// current scroll, `header_height` the navbar's rendered height.
pub fn scroll_target(rect_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    rect_top + page_y_offset - header_height
}

/// Open/closed state of the hamburger menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClicked,
    NavLinkClicked,
    EscapePressed,
}

/// Menu controller state.
///
/// Mirrors the `active` class on the trigger and the menu panel.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Apply an event and return the resulting state.
    ///
    /// Link clicks and Escape always close, whatever the current state.
    pub fn handle(&mut self, event: MenuEvent) -> MenuState {
        self.state = match (event, self.state) {
            (MenuEvent::TriggerClicked, MenuState::Closed) => MenuState::Open,
            (MenuEvent::TriggerClicked, MenuState::Open) => MenuState::Closed,
            (MenuEvent::NavLinkClicked, _) | (MenuEvent::EscapePressed, _) => MenuState::Closed,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#contact"), Some("contact"));
        assert_eq!(fragment_target(" #contact "), Some("contact"));
        assert_eq!(fragment_target("https://example.com/#contact"), None);
        assert_eq!(fragment_target("#two words"), None);
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        // Section 400px below the viewport top, page already scrolled 1000px, 80px header
        assert_eq!(scroll_target(400.0, 1_000.0, 80.0), 1_320.0);
        // Section above the viewport
        assert_eq!(scroll_target(-200.0, 1_000.0, 80.0), 720.0);
    }

    #[test]
    fn test_trigger_toggles() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.handle(MenuEvent::TriggerClicked), MenuState::Open);
        assert_eq!(menu.handle(MenuEvent::TriggerClicked), MenuState::Closed);
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let mut menu = MobileMenu::new();
        menu.handle(MenuEvent::TriggerClicked);
        assert!(menu.is_open());
        assert_eq!(menu.handle(MenuEvent::EscapePressed), MenuState::Closed);
    }

    #[test]
    fn test_link_click_closes_open_menu() {
        let mut menu = MobileMenu::new();
        menu.handle(MenuEvent::TriggerClicked);
        assert_eq!(menu.handle(MenuEvent::NavLinkClicked), MenuState::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.handle(MenuEvent::EscapePressed), MenuState::Closed);
        assert_eq!(menu.handle(MenuEvent::NavLinkClicked), MenuState::Closed);
    }
}
