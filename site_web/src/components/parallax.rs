//! Mouse parallax on `.shape` elements
//!
//! Each shape keeps the inline transform it had at start; the pointer offset
//! is composed onto that base on every move, so offsets never pile up.

use site_core::errors::SiteResult;
use site_core::scroll_effects::{parallax_offset, parallax_transform};
use site_core::settings::ParallaxSettings;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent};

use crate::dom;
use crate::subscriptions::Subscription;

pub fn install(document: &Document, settings: ParallaxSettings) -> SiteResult<()> {
    if !settings.enabled {
        return Ok(());
    }
    let shapes: Vec<_> = dom::query_all(document, ".shape")?
        .into_iter()
        .map(|shape| {
            let base = dom::inline_style(&shape, "transform");
            (shape, base)
        })
        .collect();
    if shapes.is_empty() {
        return Ok(());
    }
    let window = dom::window()?;

    Subscription::ShapeParallax.subscribe(document, move |event: Event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let pointer_x = f64::from(mouse.client_x()) / width;
        let pointer_y = f64::from(mouse.client_y()) / height;

        for (index, (shape, base)) in shapes.iter().enumerate() {
            let offset = parallax_offset(&settings, index, pointer_x, pointer_y);
            if let Err(err) = dom::set_style(shape, "transform", &parallax_transform(base, offset)) {
                tracing::trace!(error = %err, "shape transform skipped");
            }
        }
    })
}
