//! # Error Types
//!
//! Structured error types for site_core. Every failure the site can hit is a
//! local one: a bad dimension, an empty form field, a malformed email, a
//! missing page element. There is no I/O, so nothing here is retryable.
//!
//! ## Example
//!
//! ```rust
//! use site_core::errors::{SiteError, SiteResult};
//!
//! fn validate_length(length_in: f64) -> SiteResult<()> {
//!     if length_in <= 0.0 {
//!         return Err(SiteError::InvalidInput {
//!             field: "length".to_string(),
//!             value: length_in.to_string(),
//!             reason: "Dimension must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for site_core operations
pub type SiteResult<T> = Result<T, SiteError>;

/// Message shown when any calculator dimension is rejected
pub const INVALID_DIMENSIONS_MESSAGE: &str = "Please enter valid dimensions for all fields.";

/// Message shown when a contact form field is empty
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Message shown when the contact email is malformed
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Structured error type for site operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SiteError {
    /// An input value is invalid (unparseable, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Email does not look like local@domain.tld
    #[error("Invalid email address: {value}")]
    InvalidEmail { value: String },

    /// Service tier value not recognized
    #[error("Unknown service tier: {value}")]
    UnknownTier { value: String },

    /// A page element the component needs is absent
    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    /// A browser API call failed
    #[error("DOM error: {operation} - {reason}")]
    Dom { operation: String, reason: String },

    /// Settings failed to parse or validate
    #[error("Invalid settings for '{field}': {reason}")]
    InvalidSettings { field: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SiteError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SiteError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        SiteError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidEmail error
    pub fn invalid_email(value: impl Into<String>) -> Self {
        SiteError::InvalidEmail {
            value: value.into(),
        }
    }

    /// Create an UnknownTier error
    pub fn unknown_tier(value: impl Into<String>) -> Self {
        SiteError::UnknownTier {
            value: value.into(),
        }
    }

    /// Create an ElementNotFound error
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        SiteError::ElementNotFound {
            selector: selector.into(),
        }
    }

    /// Create a Dom error
    pub fn dom(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        SiteError::Dom {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SiteError::InvalidSettings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the visitor typed
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SiteError::InvalidInput { .. }
                | SiteError::MissingField { .. }
                | SiteError::InvalidEmail { .. }
                | SiteError::UnknownTier { .. }
        )
    }

    /// The text shown to the visitor for this error.
    ///
    /// Calculator and form errors map to fixed, friendly strings; anything
    /// else falls back to the Display text.
    pub fn user_message(&self) -> String {
        match self {
            SiteError::InvalidInput { .. } | SiteError::UnknownTier { .. } => {
                INVALID_DIMENSIONS_MESSAGE.to_string()
            }
            SiteError::MissingField { .. } => MISSING_FIELDS_MESSAGE.to_string(),
            SiteError::InvalidEmail { .. } => INVALID_EMAIL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SiteError::InvalidInput { .. } => "INVALID_INPUT",
            SiteError::MissingField { .. } => "MISSING_FIELD",
            SiteError::InvalidEmail { .. } => "INVALID_EMAIL",
            SiteError::UnknownTier { .. } => "UNKNOWN_TIER",
            SiteError::ElementNotFound { .. } => "ELEMENT_NOT_FOUND",
            SiteError::Dom { .. } => "DOM_ERROR",
            SiteError::InvalidSettings { .. } => "INVALID_SETTINGS",
            SiteError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
