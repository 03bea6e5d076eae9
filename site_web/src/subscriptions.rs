//! Event listener wiring.
//!
//! Page-global listeners are declared as [`Subscription`]s and attached once
//! during start, each dispatching into exactly one component. Element-level
//! listeners (link clicks, form submit) go through [`listen`].
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `Closure::forget` rather than kept in a registry.

use site_core::errors::SiteResult;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::dom::JsResultExt;

/// Named page-global listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    /// window `scroll`, owned by the navbar effects
    NavbarScroll,
    /// document `mousemove`, owned by the shape parallax
    ShapeParallax,
    /// document `keydown`, owned by the mobile menu (Escape)
    MenuEscape,
    /// window `load`, owned by the page-load reveal
    PageLoaded,
    /// document `DOMContentLoaded`, owned by start when the module beats the parser
    DomReady,
}

impl Subscription {
    pub fn event_name(&self) -> &'static str {
        match self {
            Subscription::NavbarScroll => "scroll",
            Subscription::ShapeParallax => "mousemove",
            Subscription::MenuEscape => "keydown",
            Subscription::PageLoaded => "load",
            Subscription::DomReady => "DOMContentLoaded",
        }
    }

    /// Scroll and pointer handlers never call preventDefault
    pub fn is_passive(&self) -> bool {
        matches!(self, Subscription::NavbarScroll | Subscription::ShapeParallax)
    }

    /// Attach `handler` for this subscription on `target`
    pub fn subscribe<F>(self, target: &EventTarget, handler: F) -> SiteResult<()>
    where
        F: FnMut(Event) + 'static,
    {
        let options = AddEventListenerOptions::new();
        options.set_passive(self.is_passive());
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                self.event_name(),
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .dom_context("addEventListener")?;
        closure.forget();
        tracing::debug!(subscription = ?self, "subscribed");
        Ok(())
    }
}

/// Attach a plain listener to an element for the page's lifetime
pub fn listen<F>(target: &EventTarget, event_name: &str, handler: F) -> SiteResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
        .dom_context("addEventListener")?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Subscription::NavbarScroll.event_name(), "scroll");
        assert_eq!(Subscription::MenuEscape.event_name(), "keydown");
        assert_eq!(Subscription::DomReady.event_name(), "DOMContentLoaded");
    }

    #[test]
    fn test_passive_flags() {
        assert!(Subscription::ShapeParallax.is_passive());
        assert!(!Subscription::MenuEscape.is_passive());
        assert!(!Subscription::DomReady.is_passive());
    }
}
