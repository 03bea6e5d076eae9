//! Thin helpers over web-sys.
//!
//! Browser calls return `Result<_, JsValue>`; everything here converts those
//! into [`SiteError::Dom`] so components can use `?` throughout.

use site_core::errors::{SiteError, SiteResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList, Window};

/// Attach a browser operation name to a `JsValue` failure
pub trait JsResultExt<T> {
    fn dom_context(self, operation: &str) -> SiteResult<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn dom_context(self, operation: &str) -> SiteResult<T> {
        self.map_err(|value| SiteError::dom(operation, describe_js_error(&value)))
    }
}

/// Best-effort text for a thrown JS value
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or_else(|| SiteError::element_not_found("window"))
}

pub fn document() -> SiteResult<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::element_not_found("document"))
}

pub fn body(document: &Document) -> SiteResult<HtmlElement> {
    document.body().ok_or_else(|| SiteError::element_not_found("body"))
}

/// First match for a selector, if any
pub fn query(document: &Document, selector: &str) -> SiteResult<Option<Element>> {
    document.query_selector(selector).dom_context("querySelector")
}

/// First match cast to a concrete element type
pub fn query_as<T: JsCast>(document: &Document, selector: &str) -> SiteResult<Option<T>> {
    Ok(query(document, selector)?.and_then(|element| element.dyn_into::<T>().ok()))
}

/// All matches for a selector, in document order
pub fn query_all(document: &Document, selector: &str) -> SiteResult<Vec<Element>> {
    let list = document.query_selector_all(selector).dom_context("querySelectorAll")?;
    Ok(elements_of(&list))
}

fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element by id, cast to `T`; missing or wrong type is an error
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> SiteResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::element_not_found(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::dom("cast", format!("#{} has an unexpected element type", id)))
}

pub fn add_class(element: &Element, class: &str) -> SiteResult<()> {
    element.class_list().add_1(class).dom_context("classList.add")
}

pub fn remove_class(element: &Element, class: &str) -> SiteResult<()> {
    element.class_list().remove_1(class).dom_context("classList.remove")
}

/// Add or remove a class to match `on`
pub fn set_class(element: &Element, class: &str, on: bool) -> SiteResult<()> {
    if on {
        add_class(element, class)
    } else {
        remove_class(element, class)
    }
}

/// Set an inline style property on an element that may not be an HtmlElement
pub fn set_style(element: &Element, property: &str, value: &str) -> SiteResult<()> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| SiteError::dom("style", "element has no inline style"))?;
    html.style().set_property(property, value).dom_context("style.setProperty")
}

/// Current inline value of a style property, empty when unset
pub fn inline_style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}

/// The `value` of an input or textarea; anything else reads as empty
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Window as an event target
pub fn window_target() -> SiteResult<EventTarget> {
    Ok(window()?.into())
}
