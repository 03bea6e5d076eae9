//! Pricing calculator panel
//!
//! Reads `#length`, `#width`, `#height` and the checked `service` radio,
//! prices the box, then animates `#surface-area`, `#base-price` and
//! `#total-price` and rebuilds `#breakdown-details`.
//!
//! Markup triggers it through the exported `calculatePrice()`.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::animation::CounterFormat;
use site_core::errors::{SiteError, SiteResult};
use site_core::pricing::{calculate, BreakdownLine, DimensionInput, PriceBreakdown, ServiceTier};
use site_core::settings::CounterSettings;
use web_sys::{Document, Element, HtmlInputElement};

use crate::components::animator::CounterAnimator;
use crate::dom::{self, JsResultExt};

thread_local! {
    static PANEL: RefCell<Option<Rc<PricingPanel>>> = const { RefCell::new(None) };
}

pub struct PricingPanel {
    document: Document,
    counters: CounterSettings,
    animator: Rc<CounterAnimator>,
}

impl PricingPanel {
    /// Register the panel that `calculatePrice()` will drive.
    pub fn install(document: Document, counters: CounterSettings) {
        let panel = Rc::new(PricingPanel {
            document,
            counters,
            animator: CounterAnimator::new(),
        });
        PANEL.with(|slot| *slot.borrow_mut() = Some(panel));
    }

    /// Run the installed panel, if any
    pub fn with_installed<R>(f: impl FnOnce(&PricingPanel) -> R) -> Option<R> {
        PANEL.with(|slot| slot.borrow().as_ref().map(|panel| f(panel)))
    }

    /// One calculator run. Input errors become a blocking alert.
    pub fn calculate_price(&self) -> SiteResult<()> {
        let quote = match self.read_input().and_then(|(input, tier)| calculate(&input, tier)) {
            Ok(quote) => quote,
            Err(err) if err.is_validation() => {
                tracing::info!(code = err.error_code(), error = %err, "quote rejected");
                return dom::window()?
                    .alert_with_message(&err.user_message())
                    .dom_context("alert");
            }
            Err(err) => return Err(err),
        };

        self.render(&quote)?;
        tracing::info!(
            tier = %quote.tier,
            total_sq_in = quote.total_area.0,
            final_price = quote.final_price.0,
            "quote rendered"
        );
        Ok(())
    }

    fn read_input(&self) -> SiteResult<(DimensionInput, ServiceTier)> {
        let length: HtmlInputElement = dom::by_id(&self.document, "length")?;
        let width: HtmlInputElement = dom::by_id(&self.document, "width")?;
        let height: HtmlInputElement = dom::by_id(&self.document, "height")?;
        let input = DimensionInput::parse(&length.value(), &width.value(), &height.value())?;

        let tier = match dom::query_as::<HtmlInputElement>(&self.document, "input[name=\"service\"]:checked")? {
            Some(radio) => radio.value().parse()?,
            None => ServiceTier::default(),
        };
        Ok((input, tier))
    }

    fn render(&self, quote: &PriceBreakdown) -> SiteResult<()> {
        // Resolve every target before touching any, so a missing one renders nothing
        let mut targets = Vec::new();
        for id in output_ids() {
            let element: Element = dom::by_id(&self.document, id)?;
            targets.push(element);
        }
        let details = targets.pop().ok_or_else(|| SiteError::Internal {
            message: "no breakdown target".to_string(),
        })?;

        for (counter, element) in counter_targets(quote, &self.counters).into_iter().zip(targets) {
            self.animator
                .animate(counter.id, element, 0.0, counter.value, counter.duration_ms, counter.format)?;
        }

        details.set_inner_html("");
        for line in quote.lines() {
            let row = self.render_line(&line)?;
            details
                .append_child(&row)
                .dom_context("appendChild")?;
        }
        Ok(())
    }

    fn render_line(&self, line: &BreakdownLine) -> SiteResult<Element> {
        let row = self.document.create_element("div").dom_context("createElement")?;
        row.set_class_name(line_class(line));
        if let Some((label, value)) = line_text(line) {
            for text in [label, value] {
                let span = self.document.create_element("span").dom_context("createElement")?;
                span.set_text_content(Some(text));
                row.append_child(&span).dom_context("appendChild")?;
            }
        }
        Ok(row)
    }
}

const BREAKDOWN_ID: &str = "breakdown-details";

/// One animated output of a quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTarget {
    pub id: &'static str,
    pub value: f64,
    pub duration_ms: u32,
    pub format: CounterFormat,
}

/// The three counters a quote animates, in render order
pub fn counter_targets(quote: &PriceBreakdown, settings: &CounterSettings) -> [CounterTarget; 3] {
    [
        CounterTarget {
            id: "surface-area",
            value: quote.total_area.0,
            duration_ms: settings.surface_area_ms,
            format: CounterFormat::SquareInches,
        },
        CounterTarget {
            id: "base-price",
            value: quote.base_price.0,
            duration_ms: settings.base_price_ms,
            format: CounterFormat::Currency,
        },
        CounterTarget {
            id: "total-price",
            value: quote.final_price.0,
            duration_ms: settings.total_price_ms,
            format: CounterFormat::Currency,
        },
    ]
}

/// Every element a render writes to, counters first and the breakdown last
pub fn output_ids() -> [&'static str; 4] {
    ["surface-area", "base-price", "total-price", BREAKDOWN_ID]
}

/// Entry point behind the exported `calculatePrice()`
pub fn calculate_installed() -> SiteResult<()> {
    PricingPanel::with_installed(|panel| panel.calculate_price())
        .unwrap_or_else(|| Err(SiteError::Internal {
            message: "pricing panel not installed".to_string(),
        }))
}

/// CSS class for a breakdown row
pub fn line_class(line: &BreakdownLine) -> &'static str {
    match line {
        BreakdownLine::Item { .. } => "breakdown-item",
        BreakdownLine::Divider => "breakdown-divider",
        BreakdownLine::Total { .. } => "breakdown-item total",
        BreakdownLine::Final { .. } => "breakdown-item final",
    }
}

fn line_text(line: &BreakdownLine) -> Option<(&str, &str)> {
    match line {
        BreakdownLine::Item { label, value }
        | BreakdownLine::Total { label, value }
        | BreakdownLine::Final { label, value } => Some((label.as_str(), value.as_str())),
        BreakdownLine::Divider => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_classes() {
        let quote = calculate(&DimensionInput::new(12.0, 10.0, 8.0), ServiceTier::Basic).unwrap();
        let classes: Vec<&str> = quote.lines().iter().map(line_class).collect();
        assert_eq!(
            classes,
            vec![
                "breakdown-item",
                "breakdown-item",
                "breakdown-item",
                "breakdown-divider",
                "breakdown-item total",
                "breakdown-item",
                "breakdown-item",
                "breakdown-item final",
            ]
        );
    }

    #[test]
    fn test_counter_targets() {
        let quote = calculate(&DimensionInput::new(12.0, 10.0, 8.0), ServiceTier::Premium).unwrap();
        let [area, base, total] = counter_targets(&quote, &CounterSettings::default());
        assert_eq!((area.id, area.value, area.duration_ms), ("surface-area", 592.0, 800));
        assert_eq!(area.format, CounterFormat::SquareInches);
        assert_eq!((base.id, base.duration_ms), ("base-price", 800));
        assert!((base.value - 8.88).abs() < 1e-9);
        assert_eq!((total.id, total.value, total.duration_ms), ("total-price", 9.0, 1000));
    }

    #[test]
    fn test_output_ids_cover_every_write() {
        let quote = calculate(&DimensionInput::new(12.0, 10.0, 8.0), ServiceTier::Basic).unwrap();
        let ids = output_ids();
        for counter in counter_targets(&quote, &CounterSettings::default()) {
            assert!(ids.contains(&counter.id));
        }
        // The breakdown is resolved last and popped off before animating
        assert_eq!(ids[3], "breakdown-details");
    }

    #[test]
    fn test_divider_has_no_text() {
        assert_eq!(line_text(&BreakdownLine::Divider), None);
        let total = BreakdownLine::Total {
            label: "Total Surface Area:".to_string(),
            value: "592 sq in".to_string(),
        };
        assert_eq!(line_text(&total), Some(("Total Surface Area:", "592 sq in")));
    }
}
