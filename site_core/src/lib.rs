//! # site_core - Folio Site Logic
//!
//! `site_core` holds everything about the marketing site that does not touch
//! the DOM: the surface-area pricing calculator, form validation, and the
//! small state machines behind the menu, navbar, reveals, toasts and
//! animated counters. It builds for the host and for `wasm32`, so all of it
//! is tested with plain `cargo test`.
//!
//! ## Design Philosophy
//!
//! - **Stateless math**: pricing is a pure function of input
//! - **Explicit time**: anything that waits takes `now_ms` from a [`clock::Clock`]
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use site_core::pricing::{calculate, DimensionInput, ServiceTier};
//!
//! let quote = calculate(&DimensionInput::new(12.0, 10.0, 8.0), ServiceTier::Premium).unwrap();
//! assert_eq!(quote.final_price.to_string(), "$9.00");
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - Surface-area quote calculator
//! - [`animation`] - Value tweens for animated counters
//! - [`contact`] - Contact form validation and simulated submission
//! - [`notification`] - Toast messages and their lifecycle
//! - [`navigation`] - Anchor scrolling and the mobile menu
//! - [`scroll_effects`] - Navbar scroll states and shape parallax
//! - [`reveal`] - One-shot scroll reveals
//! - [`settings`] - Timings and thresholds
//! - [`units`] - Unit newtypes
//! - [`errors`] - Structured error types

pub mod animation;
pub mod clock;
pub mod contact;
pub mod errors;
pub mod navigation;
pub mod notification;
pub mod pricing;
pub mod reveal;
pub mod scroll_effects;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{SiteError, SiteResult};
pub use notification::{Notification, NotificationKind};
pub use pricing::{calculate, DimensionInput, PriceBreakdown, ServiceTier};
pub use settings::SiteSettings;
