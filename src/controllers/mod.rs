//! Browser bindings: attach page behavior to the static markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller looks up the elements it owns, installs listeners and
//! observers, and forwards events into `state`. Controllers do not talk to
//! each other; the only shared piece is the banner `Notifier`.

pub mod chrome;
pub mod engagement;
pub mod forms;
pub mod gallery;
