//! Leptos components mounted into the static page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup is static HTML; only overlays that the page does
//! not ship (the banner stack and the fullscreen viewer) are rendered by
//! Leptos and appended to `<body>` at boot.

pub mod banner_stack;
pub mod fullscreen_viewer;
