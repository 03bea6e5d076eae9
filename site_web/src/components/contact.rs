//! Contact form handler
//!
//! Wires `#contact-form` submit to the [`ContactForm`] machine. The submit
//! button is disabled and relabeled while the simulated send is in flight.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::clock::Clock;
use site_core::contact::{ContactForm, FormSubmission, SubmitOutcome};
use site_core::errors::{SiteError, SiteResult};
use site_core::notification::Notification;
use site_core::settings::ContactSettings;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement};

use crate::components::toast::Toaster;
use crate::dom;
use crate::subscriptions;
use crate::timers::{self, PerformanceClock};

pub struct ContactFormHandler {
    form: HtmlFormElement,
    submit_button: Option<HtmlButtonElement>,
    /// Button label captured before switching to the sending label
    original_label: RefCell<Option<String>>,
    machine: RefCell<ContactForm>,
    settings: ContactSettings,
    toaster: Rc<Toaster>,
    clock: PerformanceClock,
}

impl ContactFormHandler {
    /// Attach to `#contact-form`. A page without the form is fine.
    pub fn install(document: &Document, settings: ContactSettings, toaster: Rc<Toaster>) -> SiteResult<()> {
        let form = match dom::by_id::<HtmlFormElement>(document, "contact-form") {
            Ok(form) => form,
            Err(SiteError::ElementNotFound { .. }) => {
                tracing::debug!("no contact form on page");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let submit_button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());

        let handler = Rc::new(ContactFormHandler {
            machine: RefCell::new(ContactForm::new(settings.submit_latency_ms)),
            form: form.clone(),
            submit_button,
            original_label: RefCell::new(None),
            settings,
            toaster,
            clock: PerformanceClock::new(),
        });

        subscriptions::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            if let Err(err) = Rc::clone(&handler).on_submit() {
                tracing::error!(error = %err, "contact form submit failed");
            }
        })
    }

    fn read_submission(&self) -> FormSubmission {
        let value = |name: &str| {
            self.form
                .query_selector(&format!("[name=\"{}\"]", name))
                .ok()
                .flatten()
                .map(|element| dom::field_value(&element))
                .unwrap_or_default()
        };
        FormSubmission::new(value("name"), value("email"), value("message"))
    }

    fn on_submit(self: Rc<Self>) -> SiteResult<()> {
        let submission = self.read_submission();
        let now = self.clock.now_ms();
        let outcome = self.machine.borrow_mut().submit(submission, now);

        match outcome {
            SubmitOutcome::Rejected(err) => {
                self.toaster.notify(Notification::error(err.user_message()));
                Ok(())
            }
            SubmitOutcome::Busy => Ok(()),
            SubmitOutcome::Accepted { completes_at_ms } => {
                tracing::info!("contact form submitting");
                self.set_sending(true);
                self.schedule_completion(completes_at_ms - now)
            }
        }
    }

    fn schedule_completion(self: Rc<Self>, delay_ms: f64) -> SiteResult<()> {
        let delay = delay_ms.max(0.0).ceil() as u32;
        timers::set_timeout(delay, move || {
            let now = self.clock.now_ms();
            let receipt = self.machine.borrow_mut().poll(now);
            match receipt {
                Some(receipt) => {
                    self.finish();
                    tracing::info!(submitted_at = %receipt.submitted_at, "contact form sent");
                }
                // Timer fired a hair early; try again shortly
                None if self.machine.borrow().is_submitting() => {
                    if let Err(err) = Rc::clone(&self).schedule_completion(1.0) {
                        tracing::error!(error = %err, "could not reschedule submission");
                    }
                }
                None => {}
            }
        })
    }

    fn finish(&self) {
        self.toaster
            .notify(Notification::success(self.settings.success_message.clone()));
        self.form.reset();
        self.set_sending(false);
    }

    fn set_sending(&self, sending: bool) {
        let Some(button) = &self.submit_button else {
            return;
        };
        if sending {
            *self.original_label.borrow_mut() = button.text_content();
            button.set_text_content(Some(&self.settings.sending_label));
        } else if let Some(label) = self.original_label.borrow_mut().take() {
            button.set_text_content(Some(&label));
        }
        button.set_disabled(sending);
    }
}
