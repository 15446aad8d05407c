//! Statistic counters and scroll-reveal animations.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::config::EngagementConfig;
use crate::error::SiteError;
use crate::state::counter::{CounterAnimation, parse_target};
use crate::util::dom::{query_all, set_style};
use crate::util::observer::observe_once;

const COUNTER_SELECTOR: &str = ".stat-number";
const REVEAL_SELECTOR: &str = ".stat-item, .feature-card, .career-card, .faculty-card";

/// # Errors
///
/// Fails when the browser rejects the observer options.
pub fn init(document: &Document, config: &EngagementConfig) -> Result<(), SiteError> {
    init_counters(document, config)?;
    init_reveal(document, config)
}

fn init_counters(document: &Document, config: &EngagementConfig) -> Result<(), SiteError> {
    let counters = query_all(document, COUNTER_SELECTOR);
    let duration_ms = config.counter_duration_ms;
    let tick_ms = config.counter_tick_ms;
    observe_once(counters, Some(&config.counter_observer), move |entered| {
        let raw = entered.element.get_attribute("data-target").unwrap_or_default();
        let Some(target) = parse_target(&raw) else {
            log::warn!("counter #{} has non-numeric data-target {raw:?}", entered.index);
            return;
        };
        set_style(entered.element, "animation", "countUp 0.6s ease-out");
        schedule_tick(entered.element.clone(), CounterAnimation::new(target, duration_ms, tick_ms), tick_ms);
    })
}

/// Each tick re-arms a one-shot timeout until the animation reports the
/// final frame, so nothing has to cancel an interval from inside itself.
fn schedule_tick(element: Element, mut animation: CounterAnimation, tick_ms: u32) {
    Timeout::new(tick_ms, move || {
        let frame = animation.tick();
        element.set_text_content(Some(&frame.value().to_string()));
        if !frame.is_finished() {
            schedule_tick(element, animation, tick_ms);
        }
    })
    .forget();
}

fn init_reveal(document: &Document, config: &EngagementConfig) -> Result<(), SiteError> {
    let elements = query_all(document, REVEAL_SELECTOR);
    for el in &elements {
        set_style(el, "opacity", "0");
        set_style(el, "transform", "translateY(30px)");
    }
    observe_once(elements, Some(&config.reveal_observer), |entered| {
        set_style(entered.element, "animation", "fadeInUp 0.6s ease-out forwards");
    })
}
