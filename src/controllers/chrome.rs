//! Navbar, theme toggle, scroll-to-top, active links and anchor scrolling.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::ChromeConfig;
use crate::error::SiteError;
use crate::state::chrome::{
    ScrollChrome, SectionSpan, active_section, anchor_is_scrollable, anchor_scroll_top, is_main_page, link_is_active,
};
use crate::state::theme::{STORAGE_KEY, THEME_ATTRIBUTE, Theme, ThemeState};
use crate::util::dom::{self, listen, log_js_err, query_all, set_class};
use crate::util::{bootstrap, storage};

/// Attach every page-chrome behavior present in the markup.
///
/// # Errors
///
/// Fails only when the window itself is unavailable.
pub fn init(document: &Document, config: &ChromeConfig) -> Result<(), SiteError> {
    init_scroll_chrome(document, config)?;
    init_theme_toggle(document);
    init_scroll_to_top(document);
    init_mobile_menu(document);
    init_anchor_scrolling(document, config);
    let pathname = dom::window()?.location().pathname()?;
    if is_main_page(&pathname) {
        init_active_links(document, config)?;
    }
    Ok(())
}

fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn init_scroll_chrome(document: &Document, config: &ChromeConfig) -> Result<(), SiteError> {
    let navbar = document.get_element_by_id("mainNavbar");
    let scroll_top = document.get_element_by_id("scrollToTop");
    if navbar.is_none() && scroll_top.is_none() {
        log::debug!("chrome: no navbar or scroll-to-top button");
        return Ok(());
    }
    let config = config.clone();
    listen(&dom::window()?, "scroll", move |_: web_sys::Event| {
        let chrome = ScrollChrome::at(scroll_y(), &config);
        if let Some(navbar) = &navbar {
            set_class(navbar, "scrolled", chrome.navbar_scrolled);
        }
        if let Some(button) = &scroll_top {
            set_class(button, "show", chrome.scroll_top_visible);
        }
    });
    Ok(())
}

fn init_scroll_to_top(document: &Document) {
    let Some(button) = document.get_element_by_id("scrollToTop") else {
        log::debug!("chrome: no scroll-to-top button");
        return;
    };
    listen(&button, "click", |_: MouseEvent| smooth_scroll_to(0.0));
}

fn apply_theme(body: &HtmlElement, icon: Option<&Element>, theme: Theme) {
    log_js_err(body.set_attribute(THEME_ATTRIBUTE, theme.as_str()), THEME_ATTRIBUTE);
    if let Some(icon) = icon {
        icon.set_class_name(theme.icon_class());
    }
}

fn init_theme_toggle(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let icon = document.get_element_by_id("themeIcon");
    let state = Rc::new(Cell::new(ThemeState::from_storage(storage::load(STORAGE_KEY).as_deref())));
    apply_theme(&body, icon.as_ref(), state.get().applied());

    let Some(toggle) = document.get_element_by_id("themeToggle") else {
        log::debug!("chrome: no theme toggle");
        return;
    };
    listen(&toggle, "click", move |_: MouseEvent| {
        let mut next = state.get();
        let theme = next.toggle();
        state.set(next);
        apply_theme(&body, icon.as_ref(), theme);
        if let Some(persisted) = next.persisted() {
            storage::save(STORAGE_KEY, persisted.as_str());
        }
        log::debug!("theme -> {}", theme.as_str());
    });
}

fn init_mobile_menu(document: &Document) {
    let Ok(Some(collapse)) = document.query_selector(".navbar-collapse") else {
        log::debug!("chrome: no collapsible navbar");
        return;
    };
    for link in query_all(document, ".navbar-nav .nav-link") {
        let collapse = collapse.clone();
        listen(&link, "click", move |_: MouseEvent| {
            if collapse.class_list().contains("show") {
                bootstrap::hide_collapse(&collapse);
            }
        });
    }
}

fn init_anchor_scrolling(document: &Document, config: &ChromeConfig) {
    for link in query_all(document, r##"a[href^="#"]"##) {
        let doc = document.clone();
        let chrome = config.clone();
        let anchor = link.clone();
        listen(&link, "click", move |ev: MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let scrollable = anchor_is_scrollable(
                &href,
                anchor.has_attribute("data-bs-toggle"),
                anchor.has_attribute("data-bs-target"),
            );
            if !scrollable {
                return;
            }
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            ev.prevent_default();
            smooth_scroll_to(anchor_scroll_top(f64::from(target.offset_top()), &chrome));
        });
    }
}

fn section_spans(sections: &[HtmlElement]) -> Vec<SectionSpan> {
    sections
        .iter()
        .map(|section| SectionSpan {
            id: section.id(),
            offset_top: f64::from(section.offset_top()),
            height: f64::from(section.client_height()),
        })
        .collect()
}

fn init_active_links(document: &Document, config: &ChromeConfig) -> Result<(), SiteError> {
    let sections = query_all(document, "section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect::<Vec<_>>();
    let links = query_all(document, r##".navbar-nav .nav-link[href^="#"]"##);
    if sections.is_empty() || links.is_empty() {
        return Ok(());
    }
    let header_offset = config.section_header_offset;
    listen(&dom::window()?, "scroll", move |_: web_sys::Event| {
        // Offsets are re-read every tick; late-loading images shift layout.
        let spans = section_spans(&sections);
        let current = active_section(&spans, scroll_y(), header_offset);
        for link in &links {
            let href = link.get_attribute("href");
            set_class(link, "active", link_is_active(href.as_deref(), current));
        }
    });
    Ok(())
}
