//! # Contact Form
//!
//! Validation and the simulated submission state machine.
//!
//! ```text
//! Idle ──submit──▶ validate ──err──▶ Rejected (stays Idle)
//!                     │
//!                     └──ok──▶ Submitting ──latency elapsed (poll)──▶ Idle + receipt
//! ```
//!
//! Nothing is sent anywhere. The only failure is a local validation error.
//!
//! ## Example
//!
//! ```rust
//! use site_core::contact::{ContactForm, FormSubmission, SubmitOutcome};
//!
//! let mut form = ContactForm::new(2_000);
//! let submission = FormSubmission::new("Ada", "ada@example.com", "Hello");
//!
//! assert!(matches!(form.submit(submission, 0.0), SubmitOutcome::Accepted { .. }));
//! assert!(form.poll(1_999.0).is_none());
//! assert!(form.poll(2_000.0).is_some());
//! assert!(form.is_idle());
//! ```

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{SiteError, SiteResult};

/// `local@domain.tld` with no whitespace and a single `@`
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

/// Check an address against the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Values read from the `name`, `email` and `message` fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        FormSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All fields present first, then the email shape.
    ///
    /// Blank-after-trim counts as missing, but the email is matched as typed,
    /// so surrounding whitespace makes it invalid.
    pub fn validate(&self) -> SiteResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SiteError::missing_field(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(SiteError::invalid_email(&self.email));
        }
        Ok(())
    }
}

/// Acknowledgment produced when a simulated submission completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub submitted_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the form is untouched and stays idle
    Rejected(SiteError),
    /// Submission started; poll again at or after `completes_at_ms`
    Accepted { completes_at_ms: f64 },
    /// A submission is already in flight; ignored
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
enum SubmitState {
    Idle,
    Submitting {
        completes_at_ms: f64,
        submitted_at: DateTime<Utc>,
    },
}

/// Submission state machine for one form
#[derive(Debug, Clone)]
pub struct ContactForm {
    latency_ms: f64,
    state: SubmitState,
}

impl ContactForm {
    pub fn new(latency_ms: u32) -> Self {
        ContactForm {
            latency_ms: f64::from(latency_ms),
            state: SubmitState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == SubmitState::Idle
    }

    pub fn is_submitting(&self) -> bool {
        !self.is_idle()
    }

    /// Validate and, if valid, start the simulated submission.
    ///
    /// The submission itself is dropped once validated; only its timing is
    /// kept.
    pub fn submit(&mut self, submission: FormSubmission, now_ms: f64) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!("submit ignored, already submitting");
            return SubmitOutcome::Busy;
        }
        if let Err(err) = submission.validate() {
            tracing::debug!(code = err.error_code(), "contact form rejected");
            return SubmitOutcome::Rejected(err);
        }
        let completes_at_ms = now_ms + self.latency_ms;
        self.state = SubmitState::Submitting {
            completes_at_ms,
            submitted_at: Utc::now(),
        };
        SubmitOutcome::Accepted { completes_at_ms }
    }

    /// Finish the in-flight submission once its latency has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<SubmissionReceipt> {
        match self.state {
            SubmitState::Submitting {
                completes_at_ms,
                submitted_at,
            } if now_ms >= completes_at_ms => {
                self.state = SubmitState::Idle;
                Some(SubmissionReceipt {
                    submitted_at,
                    completed_at: Utc::now(),
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("foo @bar.com"));
        assert!(!is_valid_email("foo@@bar.com"));
        assert!(!is_valid_email("@bar.com"));
    }

    #[test]
    fn test_missing_name_rejected_first() {
        let submission = FormSubmission::new("", "ada@example.com", "Hi");
        assert_eq!(submission.validate(), Err(SiteError::missing_field("name")));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let submission = FormSubmission::new("Ada", "ada@example.com", "   ");
        assert_eq!(submission.validate(), Err(SiteError::missing_field("message")));
    }

    #[test]
    fn test_missing_fields_checked_before_email() {
        let submission = FormSubmission::new("Ada", "foo", "");
        assert_eq!(submission.validate(), Err(SiteError::missing_field("message")));
    }

    #[test]
    fn test_padded_email_rejected() {
        let submission = FormSubmission::new("Ada", " ada@example.com", "Hello");
        assert_eq!(
            submission.validate(),
            Err(SiteError::invalid_email(" ada@example.com"))
        );
        let trailing = FormSubmission::new("Ada", "ada@example.com ", "Hello");
        assert!(trailing.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut form = ContactForm::new(2_000);
        let outcome = form.submit(FormSubmission::new("Ada", "foo", "Hello"), 0.0);
        match outcome {
            SubmitOutcome::Rejected(err) => {
                assert_eq!(err.user_message(), "Please enter a valid email address.")
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(form.is_idle());
    }

    #[test]
    fn test_rejection_keeps_form_idle() {
        let mut form = ContactForm::new(2_000);
        let outcome = form.submit(FormSubmission::new("", "ada@example.com", "Hi"), 0.0);
        assert!(matches!(outcome, SubmitOutcome::Rejected(SiteError::MissingField { .. })));
        assert!(form.is_idle());
        assert!(form.poll(10_000.0).is_none());
    }

    #[test]
    fn test_submission_completes_after_latency() {
        let clock = ManualClock::new(500.0);
        let mut form = ContactForm::new(2_000);

        let outcome = form.submit(FormSubmission::new("Ada", "ada@example.com", "Hi"), clock.now_ms());
        assert_eq!(outcome, SubmitOutcome::Accepted { completes_at_ms: 2_500.0 });
        assert!(form.is_submitting());

        clock.advance(1_999.0);
        assert!(form.poll(clock.now_ms()).is_none());

        clock.advance(1.0);
        let receipt = form.poll(clock.now_ms()).unwrap();
        assert!(receipt.completed_at >= receipt.submitted_at);
        assert!(form.is_idle());
        // Completion is delivered once
        assert!(form.poll(clock.now_ms()).is_none());
    }

    #[test]
    fn test_second_submit_while_busy_is_ignored() {
        let mut form = ContactForm::new(2_000);
        let valid = FormSubmission::new("Ada", "ada@example.com", "Hi");
        form.submit(valid.clone(), 0.0);
        assert_eq!(form.submit(valid, 100.0), SubmitOutcome::Busy);
        // Original deadline still holds
        assert!(form.poll(2_000.0).is_some());
    }
}
