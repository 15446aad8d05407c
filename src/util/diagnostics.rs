//! Logging setup and uncaught-error reporting.
//!
//! Development hosts log verbosely and surface uncaught script errors as a
//! banner; every other host logs warnings only and keeps errors out of the
//! user's view.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

/// Hostnames treated as local development.
pub const DEV_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

#[must_use]
pub fn is_dev_host(hostname: &str) -> bool {
    DEV_HOSTS.contains(&hostname)
}

/// Log level for a host.
#[must_use]
pub fn log_level(dev: bool) -> log::Level {
    if dev { log::Level::Debug } else { log::Level::Warn }
}

/// Page load time from navigation timing, when both marks were recorded.
#[must_use]
pub fn load_duration_ms(load_event_start: f64, load_event_end: f64) -> Option<f64> {
    (load_event_start > 0.0 && load_event_end >= load_event_start).then(|| load_event_end - load_event_start)
}

/// Whether the current page runs on a development host.
pub fn current_host_is_dev() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .is_some_and(|host| is_dev_host(&host))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Install the panic hook and console logger.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn init_logging(dev: bool) {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log_level(dev)) {
            web_sys::console::warn_1(&format!("logger already installed: {e}").into());
        }
    }
}

/// Report uncaught `error` events: always logged, bannered on dev hosts.
#[cfg(feature = "hydrate")]
pub fn install_error_reporter(notifier: crate::components::banner_stack::Notifier, dev: bool) {
    use crate::state::banner::BannerKind;
    use crate::state::forms::TECHNICAL_ERROR;

    let Some(window) = web_sys::window() else {
        return;
    };
    crate::util::dom::listen(&window, "error", move |ev: web_sys::ErrorEvent| {
        log::error!("uncaught script error: {} ({}:{})", ev.message(), ev.filename(), ev.lineno());
        if dev {
            notifier.notify(BannerKind::Error, TECHNICAL_ERROR);
        }
    });
}

/// When the navigation timing read should be scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTimingTrigger {
    /// `load` already fired; read on the next task.
    Now,
    /// Wait for the window `load` event.
    OnLoad,
}

/// Pick the trigger from `document.readyState`. The module may instantiate
/// after `load` has already fired.
#[must_use]
pub fn load_timing_trigger(ready_state: &str) -> LoadTimingTrigger {
    if ready_state == "complete" { LoadTimingTrigger::Now } else { LoadTimingTrigger::OnLoad }
}

/// Log how long the `load` event took, now or once it has fired.
#[cfg(feature = "hydrate")]
pub fn log_page_load_time() {
    let Ok(document) = crate::util::dom::document() else {
        return;
    };
    match load_timing_trigger(&document.ready_state()) {
        LoadTimingTrigger::Now => schedule_timing_read(),
        LoadTimingTrigger::OnLoad => {
            let Some(window) = web_sys::window() else {
                return;
            };
            crate::util::dom::listen(&window, "load", |_: web_sys::Event| schedule_timing_read());
        }
    }
}

/// loadEventEnd is only recorded after the load handlers return.
#[cfg(feature = "hydrate")]
fn schedule_timing_read() {
    gloo_timers::callback::Timeout::new(0, || {
        if let Some(ms) = navigation_load_ms() {
            log::info!("page load time: {ms:.1} ms");
        }
    })
    .forget();
}

#[cfg(feature = "hydrate")]
fn navigation_load_ms() -> Option<f64> {
    use wasm_bindgen::JsCast;

    let performance = web_sys::window()?.performance()?;
    let entries = performance.get_entries_by_type("navigation");
    let Ok(timing) = entries.get(0).dyn_into::<web_sys::PerformanceNavigationTiming>() else {
        return None;
    };
    load_duration_ms(timing.load_event_start(), timing.load_event_end())
}
