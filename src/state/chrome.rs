//! Scroll-derived navigation chrome: navbar shading, the scroll-to-top
//! affordance, and which section link is active.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use crate::config::ChromeConfig;

/// Vertical extent of one `section[id]` as laid out on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Chrome flags for one scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    pub navbar_scrolled: bool,
    pub scroll_top_visible: bool,
}

impl ScrollChrome {
    #[must_use]
    pub fn at(scroll_y: f64, config: &ChromeConfig) -> Self {
        Self {
            navbar_scrolled: scroll_y > config.navbar_scrolled_after,
            scroll_top_visible: scroll_y > config.scroll_top_visible_after,
        }
    }
}

/// Section whose span contains `scroll_y`, after shifting every span up by
/// the fixed-header allowance. The last match in document order wins.
#[must_use]
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, header_offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.offset_top - header_offset;
            scroll_y >= top && scroll_y < top + section.height
        })
        .map(|section| section.id.as_str())
}

/// Whether a nav link with `href` should carry the `active` class.
#[must_use]
pub fn link_is_active(href: Option<&str>, active: Option<&str>) -> bool {
    match (href.and_then(|h| h.strip_prefix('#')), active) {
        (Some(fragment), Some(id)) => fragment == id,
        _ => false,
    }
}

/// Active-link highlighting only runs on the landing page.
#[must_use]
pub fn is_main_page(pathname: &str) -> bool {
    pathname == "/" || pathname.ends_with("index.html")
}

/// Scroll destination for an in-page anchor, clear of the fixed navbar.
#[must_use]
pub fn anchor_scroll_top(target_offset_top: f64, config: &ChromeConfig) -> f64 {
    target_offset_top - config.anchor_scroll_offset
}

/// Anchors that only toggle Bootstrap widgets keep their default behavior.
#[must_use]
pub fn anchor_is_scrollable(href: &str, has_bs_toggle: bool, has_bs_target: bool) -> bool {
    href.len() > 1 && href.starts_with('#') && !has_bs_toggle && !has_bs_target
}
