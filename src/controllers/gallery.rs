//! Gallery page: filters, zoom modal, entrance animation, lazy image
//! fade-in, caption search and the fullscreen viewer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::{RwSignal, WithUntracked};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlImageElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::components::fullscreen_viewer::{self, handle_viewer_key, open_viewer};
use crate::config::GalleryConfig;
use crate::error::SiteError;
use crate::state::gallery::{FilterBoard, ItemTransition, caption_matches};
use crate::state::observe::stagger_delay_ms;
use crate::state::viewer::ViewerState;
use crate::util::bootstrap;
use crate::util::dom::{self, descendant_text, listen, query_all, require_by_id, set_class, set_style};
use crate::util::observer::observe_once;

const ITEM_SELECTOR: &str = ".gallery-item";
const IMAGE_SELECTOR: &str = ".gallery-image";
const FILTER_BUTTON_SELECTOR: &str = ".filter-buttons .btn";
const ZOOM_TRIGGER_SELECTOR: &str = r##"[data-bs-target="#imageModal"]"##;

/// Attach every gallery behavior present in the markup. A failing feature
/// is logged and the rest still attach.
pub fn init(document: &Document, config: &GalleryConfig) {
    init_filters(document, config);
    for (feature, result) in [
        ("zoom modal", init_zoom_modal(document)),
        ("entrance animation", init_entrance(document, config)),
        ("lazy loading", init_lazy_images(document)),
        ("fullscreen viewer", init_fullscreen_viewer(document, config)),
    ] {
        if let Err(e) = result {
            log::warn!("gallery {feature}: {e}");
        }
    }
    init_search(document);
}

// =============================================================================
// FILTERS
// =============================================================================

fn init_filters(document: &Document, config: &GalleryConfig) {
    let buttons = Rc::new(query_all(document, FILTER_BUTTON_SELECTOR));
    let items = Rc::new(query_all(document, ITEM_SELECTOR));
    if buttons.is_empty() || items.is_empty() {
        return;
    }
    let categories = items.iter().map(|item| item.get_attribute("data-category")).collect();
    let board = Rc::new(RefCell::new(FilterBoard::new(categories, &config.all_filter)));

    for button in buttons.iter() {
        let Some(filter) = button.get_attribute("data-filter") else {
            continue;
        };
        let buttons = Rc::clone(&buttons);
        let items = Rc::clone(&items);
        let board = Rc::clone(&board);
        let clicked = button.clone();
        let show_delay = config.filter_show_delay_ms;
        let hide_delay = config.filter_hide_delay_ms;
        listen(button, "click", move |_: MouseEvent| {
            for other in buttons.iter() {
                set_class(other, "active", *other == clicked);
            }
            let (generation, transitions) = board.borrow_mut().select(&filter);
            log::debug!("gallery filter -> {filter}");
            for (index, (item, transition)) in items.iter().zip(transitions).enumerate() {
                let item = item.clone();
                let board = Rc::clone(&board);
                match transition {
                    ItemTransition::Show => {
                        set_style(&item, "display", "block");
                        Timeout::new(show_delay, move || {
                            if board.borrow_mut().settle(index, generation) {
                                set_style(&item, "opacity", "1");
                                set_style(&item, "transform", "scale(1)");
                            }
                        })
                        .forget();
                    }
                    ItemTransition::Hide => {
                        set_style(&item, "opacity", "0");
                        set_style(&item, "transform", "scale(0.8)");
                        Timeout::new(hide_delay, move || {
                            if board.borrow_mut().settle(index, generation) {
                                set_style(&item, "display", "none");
                            }
                        })
                        .forget();
                    }
                }
            }
        });
    }
}

// =============================================================================
// ZOOM MODAL
// =============================================================================

fn init_zoom_modal(document: &Document) -> Result<(), SiteError> {
    let triggers = query_all(document, ZOOM_TRIGGER_SELECTOR);
    if triggers.is_empty() {
        return Ok(());
    }
    let modal = require_by_id(document, "imageModal")?;
    let image = require_by_id(document, "modalImage")?;

    for trigger in &triggers {
        let image = image.clone();
        let source = trigger.clone();
        listen(trigger, "click", move |_: MouseEvent| {
            if let Some(src) = source.get_attribute("data-image") {
                dom::log_js_err(image.set_attribute("src", &src), "modal image src");
            }
        });
    }

    let slot = image.clone();
    listen(&modal, "hidden.bs.modal", move |_: Event| {
        dom::log_js_err(slot.remove_attribute("src"), "modal image reset");
    });

    listen(document, "keydown", move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && modal.class_list().contains("show") {
            bootstrap::hide_modal(&modal);
        }
    });
    Ok(())
}

// =============================================================================
// ENTRANCE + LAZY LOADING
// =============================================================================

fn init_entrance(document: &Document, config: &GalleryConfig) -> Result<(), SiteError> {
    let items = query_all(document, ITEM_SELECTOR);
    for item in &items {
        set_style(item, "opacity", "0");
        set_style(item, "transform", "translateY(30px)");
        set_style(item, "transition", "all 0.6s ease-out");
    }
    let stagger_ms = config.entrance_stagger_ms;
    observe_once(items, Some(&config.entrance_observer), move |entered| {
        let item = entered.element.clone();
        Timeout::new(stagger_delay_ms(entered.batch_position, stagger_ms), move || {
            set_style(&item, "opacity", "1");
            set_style(&item, "transform", "translateY(0)");
        })
        .forget();
    })
}

fn init_lazy_images(document: &Document) -> Result<(), SiteError> {
    observe_once(query_all(document, IMAGE_SELECTOR), None, |entered| {
        let img = entered.element.clone();
        set_style(&img, "opacity", "0");
        set_style(&img, "transition", "opacity 0.3s ease");
        let loaded = img.clone();
        listen(&img, "load", move |_: Event| set_style(&loaded, "opacity", "1"));
        if img.dyn_ref::<HtmlImageElement>().is_some_and(HtmlImageElement::complete) {
            set_style(&img, "opacity", "1");
        }
    })
}

// =============================================================================
// SEARCH
// =============================================================================

fn apply_search(document: &Document, query: &str) {
    for item in query_all(document, ITEM_SELECTOR) {
        let title = descendant_text(&item, ".gallery-info h5");
        let description = descendant_text(&item, ".gallery-info p");
        let display = if caption_matches(query, &title, &description) { "block" } else { "none" };
        set_style(&item, "display", display);
    }
}

fn init_search(document: &Document) {
    let Some(input) = document
        .get_element_by_id("gallerySearch")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::debug!("gallery: no search box");
        return;
    };
    let doc = document.clone();
    let field = input.clone();
    listen(&input, "input", move |_: Event| apply_search(&doc, &field.value()));
}

// =============================================================================
// FULLSCREEN VIEWER
// =============================================================================

fn image_source(img: &Element) -> String {
    match img.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.src(),
        None => img.get_attribute("src").unwrap_or_default(),
    }
}

fn init_fullscreen_viewer(document: &Document, config: &GalleryConfig) -> Result<(), SiteError> {
    let width = dom::window()?.inner_width()?.as_f64().unwrap_or(0.0);
    if width <= config.fullscreen_min_width {
        log::debug!("fullscreen viewer disabled at {width}px");
        return Ok(());
    }
    let images = query_all(document, IMAGE_SELECTOR);
    let state = RwSignal::new(ViewerState::new(images.iter().map(image_source).collect()));
    fullscreen_viewer::mount(state)?;

    for (index, img) in images.iter().enumerate() {
        listen(img, "dblclick", move |_: MouseEvent| open_viewer(state, index));
    }
    listen(document, "keydown", move |ev: KeyboardEvent| {
        if handle_viewer_key(state, &ev.key()) {
            ev.prevent_default();
        }
    });
    log::debug!("fullscreen viewer ready with {} images", state.with_untracked(ViewerState::len));
    Ok(())
}
