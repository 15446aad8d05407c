//! # campus-site
//!
//! WASM interactivity for the Computer Education Department website. The
//! site itself is static HTML; this crate attaches behavior to it on load.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Boot sequence and the run-once guard |
//! | [`state`] | Browser-independent logic for every feature |
//! | [`controllers`] | `web-sys` event wiring (browser build only) |
//! | [`components`] | Leptos overlays: banner stack, fullscreen viewer |
//! | [`util`] | DOM, observer, storage, Bootstrap and logging helpers |
//! | [`config`] | Thresholds and timings, overridable from the page |
//! | [`error`] | `SiteError` |

pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod controllers;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: boot once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::start();
}
