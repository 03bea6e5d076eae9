//! # Unit Types
//!
//! Newtype wrappers for the handful of units the pricing calculator moves
//! around. They serialize as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use site_core::units::{Inches, SqIn, Dollars};
//!
//! let face = Inches(12.0) * Inches(10.0);
//! assert_eq!(face, SqIn(120.0));
//!
//! let price = Dollars(5.92).ceil_to_quarter();
//! assert_eq!(price, Dollars(6.0));
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

// ============================================================================
// Length / Area
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

impl Mul for Inches {
    type Output = SqIn;
    fn mul(self, rhs: Self) -> Self::Output {
        SqIn(self.0 * rhs.0)
    }
}

impl Inches {
    /// The larger of two lengths
    pub fn max(self, other: Self) -> Self {
        Inches(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Self) -> Self {
        Inches(self.0.min(other.0))
    }
}

// ============================================================================
// Currency
// ============================================================================

/// Amount in dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f64);

/// Price per square inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DollarsPerSqIn(pub f64);

impl Mul<DollarsPerSqIn> for SqIn {
    type Output = Dollars;
    fn mul(self, rhs: DollarsPerSqIn) -> Self::Output {
        Dollars(self.0 * rhs.0)
    }
}

impl Dollars {
    /// Round up to the next quarter dollar: `ceil(x * 4) / 4`
    pub fn ceil_to_quarter(self) -> Self {
        Dollars((self.0 * 4.0).ceil() / 4.0)
    }

    /// The larger of two amounts
    pub fn max(self, other: Self) -> Self {
        Dollars(self.0.max(other.0))
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl fmt::Display for DollarsPerSqIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.3}/sq in", self.0)
    }
}

impl fmt::Display for SqIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sq in", self.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);
impl_arithmetic!(Dollars);
