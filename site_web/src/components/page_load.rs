//! Body fade-in once the page has loaded.

use site_core::errors::SiteResult;
use web_sys::{Document, DocumentReadyState, Event};

use crate::dom;
use crate::subscriptions::Subscription;

const LOADED_CLASS: &str = "loaded";

pub fn install(document: &Document) -> SiteResult<()> {
    // The module may finish instantiating after `load` has already fired
    if document.ready_state() == DocumentReadyState::Complete {
        return mark_loaded(document);
    }

    let owned = document.clone();
    Subscription::PageLoaded.subscribe(&dom::window_target()?, move |_event: Event| {
        if let Err(err) = mark_loaded(&owned) {
            tracing::warn!(error = %err, "could not mark page loaded");
        }
    })
}

fn mark_loaded(document: &Document) -> SiteResult<()> {
    let body = dom::body(document)?;
    dom::add_class(&body, LOADED_CLASS)?;
    tracing::debug!("page loaded");
    Ok(())
}
