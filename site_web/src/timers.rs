//! Browser clock, timeouts and animation frames.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::clock::Clock;
use site_core::errors::SiteResult;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Performance;

use crate::dom::{self, JsResultExt};

/// [`Clock`] over `performance.now()`, falling back to `Date.now()`
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        PerformanceClock {
            performance: web_sys::window().and_then(|window| window.performance()),
        }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}

/// Run `callback` once after `delay_ms`. Not cancellable.
pub fn set_timeout<F>(delay_ms: u32, callback: F) -> SiteResult<()>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    dom::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        .dom_context("setTimeout")?;
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Call `step` on every animation frame until it returns `false`.
pub fn run_frames<F>(mut step: F) -> SiteResult<()>
where
    F: FnMut() -> bool + 'static,
{
    let slot: FrameCallback = Rc::new(RefCell::new(None));
    let handle = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
        if !step() {
            // Drop the closure so the loop's captures are released
            let _ = handle.borrow_mut().take();
            return;
        }
        if let Err(err) = request_frame(&handle) {
            tracing::warn!(error = %err, "animation frame request failed");
            let _ = handle.borrow_mut().take();
        }
    }));

    request_frame(&slot)
}

fn request_frame(slot: &FrameCallback) -> SiteResult<()> {
    let borrowed = slot.borrow();
    if let Some(closure) = borrowed.as_ref() {
        dom::window()?
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .dom_context("requestAnimationFrame")?;
    }
    Ok(())
}
