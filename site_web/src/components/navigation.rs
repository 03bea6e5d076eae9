//! Navigation router and mobile menu
//!
//! `.nav-link` clicks with a fragment href scroll smoothly to the target,
//! leaving room for the fixed `.navbar`. The menu mirrors [`MobileMenu`]
//! onto the `active` class of `.hamburger` and `.nav-menu`.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::errors::SiteResult;
use site_core::navigation::{fragment_target, scroll_target, MenuEvent, MenuState, MobileMenu};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, JsResultExt};
use crate::subscriptions::{self, Subscription};

const ACTIVE_CLASS: &str = "active";

/// Attach smooth scrolling to every `.nav-link`
pub fn install_router(document: &Document) -> SiteResult<()> {
    let links = dom::query_all(document, ".nav-link")?;
    for link in &links {
        let document = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        subscriptions::listen(link, "click", move |event: Event| {
            let Some(id) = fragment_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Err(err) = scroll_to_section(&document, id) {
                tracing::warn!(error = %err, section = id, "smooth scroll failed");
            }
        })?;
    }
    tracing::debug!(links = links.len(), "navigation router installed");
    Ok(())
}

fn scroll_to_section(document: &Document, id: &str) -> SiteResult<()> {
    let Some(section) = document.get_element_by_id(id) else {
        tracing::debug!(section = id, "anchor target missing");
        return Ok(());
    };
    let window = dom::window()?;
    let header_height = dom::query_as::<HtmlElement>(document, ".navbar")?
        .map(|navbar| f64::from(navbar.offset_height()))
        .unwrap_or(0.0);
    let top = scroll_target(
        section.get_bounding_client_rect().top(),
        window.page_y_offset().dom_context("pageYOffset")?,
        header_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Hamburger menu bound to its two elements
pub struct MenuController {
    menu: RefCell<MobileMenu>,
    trigger: Element,
    panel: Element,
}

impl MenuController {
    /// Wire the trigger, the nav links and Escape. Skipped if either element is missing.
    pub fn install(document: &Document) -> SiteResult<()> {
        let (Some(trigger), Some(panel)) = (
            dom::query(document, ".hamburger")?,
            dom::query(document, ".nav-menu")?,
        ) else {
            tracing::debug!("no mobile menu on page");
            return Ok(());
        };

        let controller = Rc::new(MenuController {
            menu: RefCell::new(MobileMenu::new()),
            trigger: trigger.clone(),
            panel,
        });

        let on_trigger = Rc::clone(&controller);
        subscriptions::listen(&trigger, "click", move |_event: Event| {
            on_trigger.dispatch(MenuEvent::TriggerClicked);
        })?;

        for link in dom::query_all(document, ".nav-link")? {
            let on_link = Rc::clone(&controller);
            subscriptions::listen(&link, "click", move |_event: Event| {
                on_link.dispatch(MenuEvent::NavLinkClicked);
            })?;
        }

        let on_key = Rc::clone(&controller);
        Subscription::MenuEscape.subscribe(document, move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map(|key| key.key() == "Escape")
                .unwrap_or(false);
            if is_escape {
                on_key.dispatch(MenuEvent::EscapePressed);
            }
        })
    }

    fn dispatch(&self, event: MenuEvent) {
        let state = self.menu.borrow_mut().handle(event);
        let open = state == MenuState::Open;
        for element in [&self.trigger, &self.panel] {
            if let Err(err) = dom::set_class(element, ACTIVE_CLASS, open) {
                tracing::warn!(error = %err, "menu class update failed");
            }
        }
    }
}
