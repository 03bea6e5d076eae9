//! # site_web - Folio Site Browser Layer
//!
//! Compiles to WebAssembly and wires [`site_core`] into the page. On
//! instantiation [`start`] loads settings, installs the console logger and
//! publishes the markup-facing functions on `window`. Stylesheets and
//! components are attached once the document is parsed, deferring to
//! `DOMContentLoaded` when the module instantiates first.
//!
//! The pricing calculator is invoked from markup through `window.calculatePrice`:
//!
//! ```html
//! <button onclick="calculatePrice()">Calculate</button>
//! ```

pub mod assets;
pub mod components;
pub mod dom;
pub mod globals;
pub mod logging;
pub mod subscriptions;
pub mod timers;

use site_core::errors::SiteResult;
use site_core::settings::{SiteSettings, SETTINGS_ELEMENT_ID};
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Event};

use crate::components::{contact, navbar, navigation, page_load, parallax, pricing, reveal, toast};
use crate::subscriptions::Subscription;

/// Module entry point, run once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document().map_err(to_js)?;
    let (settings, settings_error) = match load_settings(&document) {
        Ok(settings) => (settings, None),
        Err(err) => (SiteSettings::default(), Some(err)),
    };

    logging::init_console_logger(settings.log_level);
    if let Some(err) = settings_error {
        tracing::warn!(error = %err, "ignoring site-config, using defaults");
    }

    globals::publish_all(&dom::window().map_err(to_js)?).map_err(to_js)?;

    if awaits_dom_ready(document.ready_state()) {
        let owned = document.clone();
        let mut pending = Some(settings);
        Subscription::DomReady
            .subscribe(&document, move |_event: Event| {
                if let Some(settings) = pending.take() {
                    install_logged(&owned, settings);
                }
            })
            .map_err(to_js)?;
        tracing::debug!("document still parsing, install deferred");
        return Ok(());
    }

    install(&document, settings).map_err(to_js)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "site ready");
    Ok(())
}

/// Components query the DOM once at install, so they must wait for the parser
fn awaits_dom_ready(state: DocumentReadyState) -> bool {
    state == DocumentReadyState::Loading
}

fn install_logged(document: &Document, settings: SiteSettings) {
    match install(document, settings) {
        Ok(()) => tracing::info!(version = env!("CARGO_PKG_VERSION"), "site ready"),
        Err(err) => tracing::error!(error = %err, "site install failed"),
    }
}

/// Recalculate the quote from the current calculator inputs.
///
/// Module export for bundler users; inline handlers use the `window` copy
/// published by [`globals`].
#[wasm_bindgen(js_name = calculatePrice)]
pub fn calculate_price() -> Result<(), JsValue> {
    pricing::calculate_installed().map_err(|err| {
        tracing::error!(error = %err, "price calculation failed");
        to_js(err)
    })
}

/// Read the optional embedded settings script; absent means defaults.
fn load_settings(document: &Document) -> SiteResult<SiteSettings> {
    match document.get_element_by_id(SETTINGS_ELEMENT_ID) {
        Some(script) => {
            let json = script.text_content().unwrap_or_default();
            SiteSettings::from_json(&json)
        }
        None => Ok(SiteSettings::default()),
    }
}

/// Register styles and attach every component, in dependency order.
fn install(document: &Document, settings: SiteSettings) -> SiteResult<()> {
    assets::register_stylesheets(document)?;

    reveal::install(document, settings.reveal)?;
    navigation::install_router(document)?;
    navigation::MenuController::install(document)?;
    navbar::install(document, settings.navbar)?;
    page_load::install(document)?;
    parallax::install(document, settings.parallax)?;

    pricing::PricingPanel::install(document.clone(), settings.counters);
    let toaster = toast::Toaster::new(document.clone(), settings.toast);
    contact::ContactFormHandler::install(document, settings.contact, toaster)?;
    Ok(())
}

fn to_js(err: site_core::SiteError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_waits_only_while_parsing() {
        assert!(awaits_dom_ready(DocumentReadyState::Loading));
        assert!(!awaits_dom_ready(DocumentReadyState::Interactive));
        assert!(!awaits_dom_ready(DocumentReadyState::Complete));
    }
}
