//! One-shot intersection observation.
//!
//! Wraps `IntersectionObserver` around a [`OneShotSet`]: each element fires
//! its callback on the first intersection only, and is unobserved right
//! after.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::ObserverConfig;
use crate::error::SiteError;
use crate::state::observe::{BatchEntry, Fired, OneShotSet};

/// A newly visible element, its index in the observed list, and its
/// position among all entries delivered in the same batch.
pub struct Entered<'a> {
    pub element: &'a Element,
    pub index: usize,
    pub batch_position: usize,
}

/// Observe `elements` and call `on_enter` the first time each intersects.
///
/// # Errors
///
/// Returns [`SiteError::Js`] when the browser rejects the observer options.
pub fn observe_once<F>(elements: Vec<Element>, config: Option<&ObserverConfig>, on_enter: F) -> Result<(), SiteError>
where
    F: FnMut(Entered<'_>) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }
    let triggers = Rc::new(RefCell::new(OneShotSet::new(elements.len())));
    let tracked = Rc::new(elements);
    let tracked_cb = Rc::clone(&tracked);
    let mut on_enter = on_enter;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    let target = entry.target();
                    BatchEntry {
                        index: tracked_cb.iter().position(|el| *el == target),
                        intersecting: entry.is_intersecting(),
                    }
                });
            let fired = triggers.borrow_mut().record_batch(batch);
            for Fired { index, batch_position } in fired {
                let Some(element) = tracked_cb.get(index) else {
                    continue;
                };
                observer.unobserve(element);
                on_enter(Entered { element, index, batch_position });
            }
        },
    );

    let observer = match config {
        Some(config) => {
            let init = IntersectionObserverInit::new();
            init.set_threshold(&config.threshold.into());
            init.set_root_margin(&config.root_margin);
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    for el in tracked.iter() {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}
