//! # Surface-Area Pricing
//!
//! Prices a rectangular box by its exterior surface area.
//!
//! ## Method
//!
//! With `a = max(length, width)` and `b = min(length, width)`:
//!
//! - top/bottom = 2 × length × width
//! - long sides = 2 × a × height
//! - short sides = 2 × b × height
//!
//! The base price is `total × rate`, rounded up to the next quarter dollar,
//! then floored at the tier minimum.
//!
//! ## Example
//!
//! ```rust
//! use site_core::pricing::{calculate, DimensionInput, ServiceTier};
//!
//! let input = DimensionInput::new(12.0, 10.0, 8.0);
//! let quote = calculate(&input, ServiceTier::Basic).unwrap();
//!
//! assert_eq!(quote.total_area.0, 592.0);
//! assert_eq!(quote.final_price.0, 6.00);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SiteError, SiteResult};
use crate::pricing::ServiceTier;
use crate::units::{Dollars, DollarsPerSqIn, Inches, SqIn};

/// Box dimensions entered in the `length`, `width` and `height` inputs.
///
/// ## JSON Example
///
/// ```json
/// { "length_in": 12.0, "width_in": 10.0, "height_in": 8.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionInput {
    pub length_in: f64,
    pub width_in: f64,
    pub height_in: f64,
}

impl DimensionInput {
    pub fn new(length_in: f64, width_in: f64, height_in: f64) -> Self {
        DimensionInput {
            length_in,
            width_in,
            height_in,
        }
    }

    /// Parse the raw text of the three inputs.
    ///
    /// Blank or unparseable text is rejected here; sign checks happen in
    /// [`DimensionInput::validate`].
    pub fn parse(length: &str, width: &str, height: &str) -> SiteResult<Self> {
        Ok(DimensionInput {
            length_in: parse_dimension("length", length)?,
            width_in: parse_dimension("width", width)?,
            height_in: parse_dimension("height", height)?,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> SiteResult<()> {
        for (field, value) in [
            ("length", self.length_in),
            ("width", self.width_in),
            ("height", self.height_in),
        ] {
            if !value.is_finite() {
                return Err(SiteError::invalid_input(field, value.to_string(), "Dimension must be a finite number"));
            }
            if value <= 0.0 {
                return Err(SiteError::invalid_input(field, value.to_string(), "Dimension must be positive"));
            }
        }
        Ok(())
    }

    pub fn length(&self) -> Inches {
        Inches(self.length_in)
    }

    pub fn width(&self) -> Inches {
        Inches(self.width_in)
    }

    pub fn height(&self) -> Inches {
        Inches(self.height_in)
    }
}

fn parse_dimension(field: &str, raw: &str) -> SiteResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SiteError::invalid_input(field, raw, "Dimension is required"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| SiteError::invalid_input(field, raw, "Dimension must be a number"))
}

/// Itemized quote, recomputed on every request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub tier: ServiceTier,
    /// Both length × width faces
    pub top_bottom_area: SqIn,
    /// Both faces spanning the longer of length/width
    pub long_sides_area: SqIn,
    /// Both faces spanning the shorter of length/width
    pub short_sides_area: SqIn,
    pub total_area: SqIn,
    pub rate: DollarsPerSqIn,
    /// total_area × rate, unrounded
    pub base_price: Dollars,
    /// base_price rounded up to the quarter
    pub rounded_price: Dollars,
    /// rounded_price floored at the tier minimum
    pub final_price: Dollars,
}

impl PriceBreakdown {
    /// True when the tier minimum set the price
    pub fn minimum_applied(&self) -> bool {
        self.final_price > self.rounded_price
    }

    /// Rows for the itemized breakdown panel, top to bottom.
    pub fn lines(&self) -> Vec<BreakdownLine> {
        vec![
            BreakdownLine::face("Top/Bottom surfaces:", self.top_bottom_area),
            BreakdownLine::face("Long sides:", self.long_sides_area),
            BreakdownLine::face("Short sides:", self.short_sides_area),
            BreakdownLine::Divider,
            BreakdownLine::Total {
                label: "Total Surface Area:".to_string(),
                value: format!("{} sq in", self.total_area.0.round()),
            },
            BreakdownLine::Item {
                label: format!("Rate ({}):", self.tier),
                value: self.rate.to_string(),
            },
            BreakdownLine::Item {
                label: "Calculated price:".to_string(),
                value: self.base_price.to_string(),
            },
            BreakdownLine::Final {
                label: "Final price:".to_string(),
                value: self.final_price.to_string(),
            },
        ]
    }
}

/// One row of the rendered breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakdownLine {
    Item { label: String, value: String },
    Divider,
    Total { label: String, value: String },
    Final { label: String, value: String },
}

impl BreakdownLine {
    fn face(label: &str, pair_area: SqIn) -> Self {
        BreakdownLine::Item {
            label: label.to_string(),
            value: format!("2 × ({}) = {}", pair_area / 2.0, pair_area),
        }
    }
}

/// Price a box for the given tier.
///
/// Validation is the only failure point; past it the arithmetic is total.
pub fn calculate(input: &DimensionInput, tier: ServiceTier) -> SiteResult<PriceBreakdown> {
    input.validate()?;

    let (length, width, height) = (input.length(), input.width(), input.height());
    let long = length.max(width);
    let short = length.min(width);

    let top_bottom_area = (length * width) * 2.0;
    let long_sides_area = (long * height) * 2.0;
    let short_sides_area = (short * height) * 2.0;
    let total_area = top_bottom_area + long_sides_area + short_sides_area;

    let rate = tier.rate();
    let base_price = total_area * rate;
    // Same quarter-dollar rule for every tier
    let rounded_price = base_price.ceil_to_quarter();
    let final_price = rounded_price.max(tier.minimum_price());

    tracing::debug!(
        tier = %tier,
        total_sq_in = total_area.0,
        base = base_price.0,
        final_price = final_price.0,
        "priced box"
    );

    Ok(PriceBreakdown {
        tier,
        top_bottom_area,
        long_sides_area,
        short_sides_area,
        total_area,
        rate,
        base_price,
        rounded_price,
        final_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_box() -> DimensionInput {
        DimensionInput::new(12.0, 10.0, 8.0)
    }

    #[test]
    fn test_basic_example() {
        let result = calculate(&test_box(), ServiceTier::Basic).unwrap();
        // 2·(120 + 96 + 80) = 592
        assert_eq!(result.top_bottom_area, SqIn(240.0));
        assert_eq!(result.long_sides_area, SqIn(192.0));
        assert_eq!(result.short_sides_area, SqIn(160.0));
        assert_eq!(result.total_area, SqIn(592.0));
        assert!((result.base_price.0 - 5.92).abs() < 1e-9);
        assert_eq!(result.rounded_price, Dollars(6.0));
        assert_eq!(result.final_price, Dollars(6.0));
        assert!(!result.minimum_applied());
    }

    #[test]
    fn test_premium_example() {
        let result = calculate(&test_box(), ServiceTier::Premium).unwrap();
        assert!((result.base_price.0 - 8.88).abs() < 1e-9);
        assert_eq!(result.rounded_price, Dollars(9.0));
        assert_eq!(result.final_price, Dollars(9.0));
    }

    #[test]
    fn test_total_area_formula() {
        for (l, w, h) in [(1.0, 2.0, 3.0), (7.5, 3.25, 0.5), (100.0, 100.0, 1.0)] {
            let result = calculate(&DimensionInput::new(l, w, h), ServiceTier::Basic).unwrap();
            let expected = 2.0 * (l * w + f64::max(l, w) * h + f64::min(l, w) * h);
            assert!((result.total_area.0 - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_swap_length_width_invariant() {
        let a = calculate(&DimensionInput::new(4.0, 9.0, 2.5), ServiceTier::Premium).unwrap();
        let b = calculate(&DimensionInput::new(9.0, 4.0, 2.5), ServiceTier::Premium).unwrap();
        assert_eq!(a.total_area, b.total_area);
        assert_eq!(a.long_sides_area, b.long_sides_area);
        assert_eq!(a.final_price, b.final_price);
    }

    #[test]
    fn test_minimum_price_floor() {
        // 2·(4 + 4 + 4) = 24 sq in, far below either minimum
        let small = DimensionInput::new(2.0, 2.0, 2.0);
        let basic = calculate(&small, ServiceTier::Basic).unwrap();
        assert_eq!(basic.final_price, Dollars(5.0));
        assert!(basic.minimum_applied());

        let premium = calculate(&small, ServiceTier::Premium).unwrap();
        assert_eq!(premium.final_price, Dollars(7.5));
    }

    #[test]
    fn test_rounds_just_above_minimum_to_next_quarter() {
        // 10 × 10 × 7.55 → 200 + 151 + 151 = 502 sq in → $5.02 basic
        let result = calculate(&DimensionInput::new(10.0, 10.0, 7.55), ServiceTier::Basic).unwrap();
        assert!(result.base_price.0 > 5.0 && result.base_price.0 <= 5.25);
        assert_eq!(result.final_price, Dollars(5.25));
    }

    #[test]
    fn test_rejects_non_positive() {
        for (l, w, h) in [(0.0, 1.0, 1.0), (1.0, -2.0, 1.0), (1.0, 1.0, 0.0)] {
            let err = calculate(&DimensionInput::new(l, w, h), ServiceTier::Basic).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(calculate(&DimensionInput::new(f64::NAN, 1.0, 1.0), ServiceTier::Basic).is_err());
        assert!(calculate(&DimensionInput::new(1.0, f64::INFINITY, 1.0), ServiceTier::Basic).is_err());
    }

    #[test]
    fn test_parse_inputs() {
        let input = DimensionInput::parse(" 12 ", "10", "8.5").unwrap();
        assert_eq!(input, DimensionInput::new(12.0, 10.0, 8.5));

        match DimensionInput::parse("12", "", "8") {
            Err(SiteError::InvalidInput { field, .. }) => assert_eq!(field, "width"),
            other => panic!("expected width error, got {:?}", other),
        }
        assert!(DimensionInput::parse("12", "10", "eight").is_err());
    }

    #[test]
    fn test_breakdown_lines() {
        let result = calculate(&test_box(), ServiceTier::Basic).unwrap();
        let lines = result.lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            BreakdownLine::Item {
                label: "Top/Bottom surfaces:".to_string(),
                value: "2 × (120 sq in) = 240 sq in".to_string(),
            }
        );
        assert_eq!(lines[3], BreakdownLine::Divider);
        assert_eq!(
            lines[5],
            BreakdownLine::Item {
                label: "Rate (basic):".to_string(),
                value: "$0.010/sq in".to_string(),
            }
        );
        assert_eq!(
            lines[7],
            BreakdownLine::Final {
                label: "Final price:".to_string(),
                value: "$6.00".to_string(),
            }
        );
    }
}
