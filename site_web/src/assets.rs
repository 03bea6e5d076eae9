//! Embedded stylesheets.
//!
//! The breakdown, notification and page-loading rules ship inside the wasm
//! binary and are injected once at start as `<style id="{name}-styles">`.

use rust_embed::RustEmbed;
use site_core::errors::{SiteError, SiteResult};
use web_sys::Document;

use crate::dom::JsResultExt;

#[derive(RustEmbed)]
#[folder = "assets/styles/"]
pub struct Stylesheets;

/// `breakdown.css` → `breakdown-styles`
pub fn style_element_id(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".css").unwrap_or(file_name);
    format!("{}-styles", stem)
}

/// Stylesheet text by file name
pub fn stylesheet(file_name: &str) -> SiteResult<String> {
    let file = Stylesheets::get(file_name)
        .ok_or_else(|| SiteError::Internal {
            message: format!("stylesheet {} not embedded", file_name),
        })?;
    String::from_utf8(file.data.into_owned()).map_err(|e| SiteError::Internal {
        message: format!("stylesheet {} is not UTF-8: {}", file_name, e),
    })
}

/// Inject every embedded stylesheet into `<head>`, skipping any already present.
pub fn register_stylesheets(document: &Document) -> SiteResult<()> {
    let head = document
        .head()
        .ok_or_else(|| SiteError::element_not_found("head"))?;

    for file_name in Stylesheets::iter() {
        let id = style_element_id(&file_name);
        if document.get_element_by_id(&id).is_some() {
            continue;
        }
        let style = document.create_element("style").dom_context("createElement")?;
        style.set_id(&id);
        style.set_text_content(Some(&stylesheet(&file_name)?));
        head.append_child(&style).dom_context("appendChild")?;
        tracing::debug!(id = %id, "stylesheet registered");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_stylesheets_embedded() {
        let mut names: Vec<String> = Stylesheets::iter().map(|name| name.into_owned()).collect();
        names.sort();
        assert_eq!(names, vec!["breakdown.css", "loading.css", "notification.css"]);
    }

    #[test]
    fn test_stylesheet_contents() {
        let css = stylesheet("notification.css").unwrap();
        assert!(css.contains(".notification.show"));
        assert!(stylesheet("missing.css").is_err());
    }

    #[test]
    fn test_style_element_ids() {
        assert_eq!(style_element_id("breakdown.css"), "breakdown-styles");
        assert_eq!(style_element_id("loading.css"), "loading-styles");
    }
}
