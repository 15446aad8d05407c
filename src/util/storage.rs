//! Browser `localStorage` access.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: private-mode browsers may refuse storage, in
//! which case reads return `None` and writes are logged and dropped. Outside
//! the browser build both are no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read a raw string value for `key`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write a raw string value for `key`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => storage,
            _ => {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            }
        };
        crate::util::dom::log_js_err(storage.set_item(key, value), "localStorage.setItem");
    }
}
