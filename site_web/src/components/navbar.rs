//! Navbar scroll effects

use std::cell::RefCell;

use site_core::errors::SiteResult;
use site_core::scroll_effects::NavbarScroll;
use site_core::settings::NavbarSettings;
use web_sys::{Document, Event};

use crate::dom::{self, JsResultExt};
use crate::subscriptions::Subscription;

/// Subscribe `.navbar` to window scroll. Skipped when there is no navbar.
pub fn install(document: &Document, settings: NavbarSettings) -> SiteResult<()> {
    let Some(navbar) = dom::query(document, ".navbar")? else {
        tracing::debug!("no navbar on page");
        return Ok(());
    };
    let window = dom::window()?;
    let state = RefCell::new(NavbarScroll::new(
        settings,
        window.scroll_y().dom_context("scrollY")?,
    ));

    Subscription::NavbarScroll.subscribe(&dom::window_target()?, move |_event: Event| {
        let Ok(scroll_y) = window.scroll_y() else {
            return;
        };
        let mut state = state.borrow_mut();
        let appearance = state.on_scroll(scroll_y);
        let result = dom::set_style(&navbar, "background", state.background_css(appearance.background))
            .and_then(|_| dom::set_style(&navbar, "transform", appearance.visibility.transform()));
        if let Err(err) = result {
            tracing::warn!(error = %err, "navbar style update failed");
        }
    })
}
