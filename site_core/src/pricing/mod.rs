//! # Pricing
//!
//! The quote calculator behind the pricing section. Follows the
//! input / result / `calculate` pattern:
//!
//! - [`DimensionInput`] - box dimensions in inches
//! - [`PriceBreakdown`] - itemized areas and prices
//! - [`calculate`] - pure function, fails only on bad input
//!
//! Tiers live in [`tier`].

pub mod calculator;
pub mod tier;

pub use calculator::{calculate, BreakdownLine, DimensionInput, PriceBreakdown};
pub use tier::ServiceTier;
