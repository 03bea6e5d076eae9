//! Notification toasts
//!
//! Each toast schedules its own three transitions at creation; toasts never
//! wait on or cancel each other.

use std::rc::Rc;

use site_core::clock::Clock;
use site_core::errors::SiteResult;
use site_core::notification::{Notification, ToastPhase, ToastTimeline};
use site_core::settings::ToastSettings;
use web_sys::{Document, Element, Node};

use crate::dom::{self, JsResultExt};
use crate::timers::{self, PerformanceClock};

/// Class that runs the entry transition
const SHOW_CLASS: &str = "show";

/// Creates and retires toast elements. Cheap to share behind an `Rc`.
pub struct Toaster {
    document: Document,
    settings: ToastSettings,
    clock: PerformanceClock,
}

impl Toaster {
    pub fn new(document: Document, settings: ToastSettings) -> Rc<Self> {
        Rc::new(Toaster {
            document,
            settings,
            clock: PerformanceClock::new(),
        })
    }

    /// Insert a toast and schedule its show, hide and removal.
    pub fn show(&self, notification: &Notification) -> SiteResult<()> {
        let element = self.document.create_element("div").dom_context("createElement")?;
        element.set_id(&notification.element_id());
        element.set_class_name(&notification.kind.class_name());
        element.set_text_content(Some(&notification.message));
        dom::body(&self.document)?
            .append_child(&element)
            .dom_context("appendChild")?;

        let timeline = ToastTimeline::new(self.clock.now_ms(), &self.settings);
        for (delay_ms, phase) in timeline.transitions() {
            let element = element.clone();
            let document = self.document.clone();
            timers::set_timeout(delay_ms, move || {
                if let Err(err) = apply_phase(&document, &element, phase) {
                    tracing::warn!(error = %err, ?phase, "toast transition failed");
                }
            })?;
        }

        tracing::info!(kind = notification.kind.as_str(), id = %notification.id, "toast shown");
        Ok(())
    }

    /// Show a toast, logging instead of failing
    pub fn notify(&self, notification: Notification) {
        if let Err(err) = self.show(&notification) {
            tracing::error!(error = %err, message = %notification.message, "could not display toast");
        }
    }
}

fn apply_phase(document: &Document, element: &Element, phase: ToastPhase) -> SiteResult<()> {
    match phase {
        ToastPhase::Created => Ok(()),
        ToastPhase::Shown => dom::add_class(element, SHOW_CLASS),
        ToastPhase::Hiding => dom::remove_class(element, SHOW_CLASS),
        ToastPhase::Removed => {
            let node: &Node = element;
            let attached = document
                .body()
                .map(|body| body.contains(Some(node)))
                .unwrap_or(false);
            if attached {
                element.remove();
            }
            Ok(())
        }
    }
}
