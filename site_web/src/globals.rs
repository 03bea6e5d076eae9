//! Functions published on `window` for inline handlers in the markup.
//!
//! wasm-bindgen exports land on the module object, which an
//! `onclick="calculatePrice()"` attribute cannot see. Each [`Global`] is
//! assigned onto `window` during start instead.

use site_core::errors::{SiteError, SiteResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::components::pricing;
use crate::dom::JsResultExt;

/// A Rust entry point reachable from markup as `window.<name>()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Global {
    /// Recalculate the quote from the calculator inputs
    CalculatePrice,
}

impl Global {
    pub const ALL: [Global; 1] = [Global::CalculatePrice];

    /// Property name on `window`
    pub fn name(&self) -> &'static str {
        match self {
            Global::CalculatePrice => "calculatePrice",
        }
    }

    fn invoke(&self) -> SiteResult<()> {
        match self {
            Global::CalculatePrice => pricing::calculate_installed(),
        }
    }

    /// Assign this function onto `window` for the page's lifetime
    pub fn publish(self, window: &Window) -> SiteResult<()> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = self.invoke() {
                tracing::error!(global = self.name(), error = %err, "global handler failed");
            }
        });
        let assigned = js_sys::Reflect::set(window, &JsValue::from_str(self.name()), closure.as_ref())
            .dom_context("Reflect.set")?;
        if !assigned {
            return Err(SiteError::dom("Reflect.set", format!("window.{} is read-only", self.name())));
        }
        closure.forget();
        Ok(())
    }
}

/// Publish every [`Global`] onto `window`
pub fn publish_all(window: &Window) -> SiteResult<()> {
    for global in Global::ALL {
        global.publish(window)?;
        tracing::debug!(global = global.name(), "published on window");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_price_name_matches_markup() {
        assert_eq!(Global::CalculatePrice.name(), "calculatePrice");
    }

    #[test]
    fn test_all_globals_listed_once() {
        assert!(Global::ALL.contains(&Global::CalculatePrice));
        let mut names: Vec<&str> = Global::ALL.iter().map(Global::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Global::ALL.len());
    }
}
