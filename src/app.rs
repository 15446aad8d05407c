//! Boot sequence.
//!
//! DESIGN
//! ======
//! The module may be instantiated before or after `DOMContentLoaded` has
//! fired. `start` defers to that event only while the document is still
//! loading, and `BootGuard` makes a second boot attempt a no-op so no
//! listener is ever bound twice.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::atomic::{AtomicBool, Ordering};

/// Run-once latch for the boot sequence.
#[derive(Debug, Default)]
pub struct BootGuard {
    booted: AtomicBool,
}

impl BootGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self { booted: AtomicBool::new(false) }
    }

    /// Claim the boot. Only the first caller gets `true`.
    pub fn claim(&self) -> bool {
        !self.booted.swap(true, Ordering::SeqCst)
    }

    #[cfg(test)]
    pub(crate) fn is_booted(&self) -> bool {
        self.booted.load(Ordering::SeqCst)
    }
}

static BOOT: BootGuard = BootGuard::new();

/// Install logging, then boot when the DOM is ready.
pub fn start() {
    let dev = crate::util::diagnostics::current_host_is_dev();
    crate::util::diagnostics::init_logging(dev);
    #[cfg(feature = "hydrate")]
    {
        match crate::util::dom::document() {
            Ok(document) => crate::util::dom::on_ready(&document, move || boot(dev)),
            Err(e) => log::error!("cannot boot: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        boot(dev);
    }
}

/// Attach every controller. Later calls are ignored.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn boot(dev: bool) {
    if !BOOT.claim() {
        log::debug!("boot already ran; skipping");
        return;
    }
    #[cfg(feature = "hydrate")]
    attach_all(dev);
}

#[cfg(feature = "hydrate")]
fn attach_all(dev: bool) {
    use crate::components::banner_stack::{self, Notifier};
    use crate::config::SiteConfig;
    use crate::controllers::{chrome, engagement, forms, gallery};
    use crate::util::diagnostics;

    let Ok(document) = crate::util::dom::document() else {
        log::error!("boot: document disappeared");
        return;
    };
    let config = SiteConfig::load();
    let notifier = Notifier::new(&config.banners);
    if let Err(e) = banner_stack::mount(notifier) {
        log::warn!("banners unavailable: {e}");
    }
    diagnostics::install_error_reporter(notifier, dev);
    if dev {
        diagnostics::log_page_load_time();
    }

    if let Err(e) = chrome::init(&document, &config.chrome) {
        log::warn!("page chrome: {e}");
    }
    if let Err(e) = engagement::init(&document, &config.engagement) {
        log::warn!("engagement widgets: {e}");
    }
    forms::init(&document, notifier);
    gallery::init(&document, &config.gallery);
    log::debug!("site controllers attached");
}
