//! Scroll reveal engine
//!
//! One IntersectionObserver watches every `[data-aos]` element. The first
//! intersection adds the reveal class, applies the `data-delay` stagger and
//! stops observing that element.

use std::cell::RefCell;

use js_sys::Array;
use site_core::errors::SiteResult;
use site_core::reveal::{parse_delay, RevealState, DELAY_ATTRIBUTE, REVEAL_ATTRIBUTE};
use site_core::settings::RevealSettings;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, JsResultExt};

pub fn install(document: &Document, settings: RevealSettings) -> SiteResult<()> {
    let elements = dom::query_all(document, &format!("[{}]", REVEAL_ATTRIBUTE))?;
    if elements.is_empty() {
        return Ok(());
    }

    let tracked: RefCell<Vec<(Element, RevealState)>> = RefCell::new(
        elements
            .iter()
            .map(|element| {
                let delay = parse_delay(element.get_attribute(DELAY_ATTRIBUTE).as_deref());
                (element.clone(), RevealState::new(delay))
            })
            .collect(),
    );
    let revealed_class = settings.revealed_class.clone();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let action = tracked
                    .borrow_mut()
                    .iter_mut()
                    .find(|(element, _)| *element == target)
                    .and_then(|(_, state)| state.on_intersection(entry.is_intersecting()));

                if let Some(action) = action {
                    if let Err(err) = reveal(&target, &revealed_class, action.transition_delay.as_deref()) {
                        tracing::warn!(error = %err, "reveal failed");
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.threshold));
    options.set_root_margin(&settings.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .dom_context("IntersectionObserver")?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    tracing::debug!(count = elements.len(), "scroll reveal observing");
    Ok(())
}

fn reveal(element: &Element, class: &str, delay: Option<&str>) -> SiteResult<()> {
    dom::add_class(element, class)?;
    if let Some(delay) = delay {
        dom::set_style(element, "transition-delay", delay)?;
    }
    Ok(())
}
