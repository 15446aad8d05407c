//! Browser-independent state for every controller.
//!
//! DESIGN
//! ======
//! Each module holds the decision logic for one concern as plain data and
//! functions, so the properties the page depends on (filter visibility,
//! counter monotonicity, viewer wrap-around, one-shot triggers) are testable
//! without a DOM. The `controllers` modules only translate events into calls
//! here and results back into DOM writes.

pub mod banner;
pub mod chrome;
pub mod counter;
pub mod forms;
pub mod gallery;
pub mod observe;
pub mod theme;
pub mod viewer;
