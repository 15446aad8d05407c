//! Element lookup, styling and listener helpers.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::SiteError;

/// The global `window`.
///
/// # Errors
///
/// [`SiteError::NoWindow`] outside a browser.
pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

/// The page document.
///
/// # Errors
///
/// [`SiteError::NoWindow`] / [`SiteError::NoDocument`].
pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Look up an element that the feature cannot work without.
///
/// # Errors
///
/// [`SiteError::MissingElement`] when the id is absent.
pub fn require_by_id(document: &Document, id: &str) -> Result<Element, SiteError> {
    document.get_element_by_id(id).ok_or_else(|| SiteError::missing(&format!("#{id}")))
}

/// Every element matching `selector`, in document order. An invalid selector
/// yields an empty list.
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Vec<Element> {
    let node = root.as_ref();
    let list = if let Some(doc) = node.dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else if let Some(el) = node.dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        log::debug!("query_all: invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First descendant of `root` matching `selector`, if any.
pub fn query_one(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Log a failed DOM call instead of silently dropping it.
pub fn log_js_err<T>(result: Result<T, wasm_bindgen::JsValue>, context: &str) {
    if let Err(err) = result {
        log::warn!("{context}: {}", SiteError::from(err));
    }
}

/// Set an inline style property.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        log_js_err(html.style().set_property(property, value), property);
    }
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, enabled: bool) {
    let list = el.class_list();
    let result = if enabled { list.add_1(class) } else { list.remove_1(class) };
    log_js_err(result, class);
}

/// Attach a page-lifetime listener. The closure is leaked on purpose: these
/// listeners live exactly as long as the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    log_js_err(
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
        event,
    );
    closure.forget();
}

/// Run `f` once the DOM is parsed: immediately when it already is,
/// otherwise on `DOMContentLoaded`.
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let closure = Closure::once(f);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    log_js_err(
        document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
            &options,
        ),
        "DOMContentLoaded",
    );
    closure.forget();
}

/// Text content of the first descendant matching `selector`, or empty.
pub fn descendant_text(root: &Element, selector: &str) -> String {
    query_one(root, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}
