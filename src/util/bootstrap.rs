//! Interop with the page's Bootstrap bundle.
//!
//! Modal and collapse widgets are owned by Bootstrap's own script. Every
//! call is imported with `catch` so a page without the bundle only logs.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::util::dom::log_js_err;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type Modal;

    #[wasm_bindgen(catch, static_method_of = Modal, js_namespace = bootstrap, js_name = getInstance)]
    fn get_instance(element: &Element) -> Result<Option<Modal>, JsValue>;

    #[wasm_bindgen(catch, method, js_name = hide)]
    fn hide(this: &Modal) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap, js_name = Collapse)]
    type Collapse;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> Result<Collapse, JsValue>;

    #[wasm_bindgen(catch, method, js_name = hide)]
    fn hide(this: &Collapse) -> Result<(), JsValue>;
}

/// Hide an open Bootstrap modal. No-op when the modal was never shown.
pub fn hide_modal(element: &Element) {
    match Modal::get_instance(element) {
        Ok(Some(modal)) => log_js_err(modal.hide(), "bootstrap.Modal.hide"),
        Ok(None) => log::debug!("hide_modal: no Bootstrap instance for #{}", element.id()),
        Err(err) => log_js_err::<()>(Err(err), "bootstrap.Modal.getInstance"),
    }
}

/// Collapse an expanded Bootstrap collapsible (the mobile menu).
pub fn hide_collapse(element: &Element) {
    match Collapse::new(element) {
        Ok(collapse) => log_js_err(collapse.hide(), "bootstrap.Collapse.hide"),
        Err(err) => log_js_err::<()>(Err(err), "bootstrap.Collapse"),
    }
}
