//! Browser helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue (element lookup, listeners,
//! observers, storage, Bootstrap interop) so controllers read as event
//! wiring around `state` calls.

#[cfg(feature = "hydrate")]
pub mod bootstrap;
pub mod diagnostics;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod observer;
pub mod storage;
