#![allow(clippy::float_cmp)]

use super::*;

fn span(id: &str, offset_top: f64, height: f64) -> SectionSpan {
    SectionSpan { id: id.to_owned(), offset_top, height }
}

fn sections() -> Vec<SectionSpan> {
    vec![span("home", 0.0, 600.0), span("about", 600.0, 400.0), span("contact", 1000.0, 500.0)]
}

// =============================================================
// ScrollChrome
// =============================================================

#[test]
fn navbar_scrolled_strictly_after_threshold() {
    let config = ChromeConfig::default();
    assert!(!ScrollChrome::at(0.0, &config).navbar_scrolled);
    assert!(!ScrollChrome::at(50.0, &config).navbar_scrolled);
    assert!(ScrollChrome::at(51.0, &config).navbar_scrolled);
}

#[test]
fn scroll_top_visible_strictly_after_threshold() {
    let config = ChromeConfig::default();
    assert!(!ScrollChrome::at(300.0, &config).scroll_top_visible);
    let chrome = ScrollChrome::at(301.0, &config);
    assert!(chrome.scroll_top_visible);
    assert!(chrome.navbar_scrolled);
}

// =============================================================
// Active section
// =============================================================

#[test]
fn active_section_applies_header_allowance() {
    let all = sections();
    // "about" starts at 600 but triggers at 500.
    assert_eq!(active_section(&all, 499.0, 100.0), Some("home"));
    assert_eq!(active_section(&all, 500.0, 100.0), Some("about"));
    assert_eq!(active_section(&all, 899.0, 100.0), Some("about"));
    assert_eq!(active_section(&all, 900.0, 100.0), Some("contact"));
}

#[test]
fn active_section_none_past_the_last_span() {
    assert_eq!(active_section(&sections(), 1400.0, 100.0), None);
}

#[test]
fn active_section_none_above_first_trigger() {
    let all = vec![span("hero", 400.0, 200.0)];
    assert_eq!(active_section(&all, 0.0, 100.0), None);
}

#[test]
fn active_section_overlap_prefers_later_section() {
    let all = vec![span("outer", 0.0, 1000.0), span("inner", 300.0, 200.0)];
    assert_eq!(active_section(&all, 250.0, 100.0), Some("inner"));
}

#[test]
fn at_most_one_link_is_active() {
    let hrefs = ["#home", "#about", "#contact", "/gallery.html"];
    let all = sections();
    let active = active_section(&all, 550.0, 100.0);
    let count = hrefs.iter().filter(|href| link_is_active(Some(**href), active)).count();
    assert_eq!(count, 1);
    assert!(link_is_active(Some("#about"), active));
}

#[test]
fn no_match_clears_every_link_even_bare_hash() {
    for href in ["#", "#home", "#about"] {
        assert!(!link_is_active(Some(href), None));
    }
    assert!(!link_is_active(None, Some("home")));
}

// =============================================================
// Page + anchors
// =============================================================

#[test]
fn main_page_detection() {
    assert!(is_main_page("/"));
    assert!(is_main_page("/index.html"));
    assert!(is_main_page("/dept/index.html"));
    assert!(!is_main_page("/gallery.html"));
}

#[test]
fn anchor_scroll_clears_navbar() {
    assert_eq!(anchor_scroll_top(1000.0, &ChromeConfig::default()), 920.0);
}

#[test]
fn anchor_scrollability() {
    assert!(anchor_is_scrollable("#about", false, false));
    assert!(!anchor_is_scrollable("#", false, false));
    assert!(!anchor_is_scrollable("#applyModal", true, false));
    assert!(!anchor_is_scrollable("#imageModal", false, true));
    assert!(!anchor_is_scrollable("/index.html#about", false, false));
}
