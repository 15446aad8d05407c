//! Error types for the browser bindings.
//!
//! Validation failures are not errors in this sense: they are ordinary
//! outcomes of `state::forms` and surface as banners. `SiteError` covers the
//! cases where a controller cannot attach to the page at all.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Failure while attaching a controller to the page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,
    /// A required element is absent from the markup.
    #[error("missing required element: {0}")]
    MissingElement(String),
    /// A DOM or JS call threw.
    #[error("javascript error: {0}")]
    Js(String),
    /// The inline site configuration block could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    /// Shorthand for a missing element lookup.
    #[must_use]
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement(selector.to_owned())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}
