//! Fullscreen lightbox over the gallery's image list.
//!
//! ARCHITECTURE
//! ============
//! `ViewerState` owns the cursor; this component only renders it. Opening
//! and closing go through [`open_viewer`] / [`close_viewer`] so the page
//! scroll lock always follows the open flag.

#[cfg(test)]
#[path = "fullscreen_viewer_test.rs"]
mod fullscreen_viewer_test;

use leptos::prelude::*;

use crate::state::viewer::{ViewerKey, ViewerState};

/// Element id of the injected stylesheet.
pub const STYLE_ELEMENT_ID: &str = "fullscreen-viewer-style";

/// Overlay styling injected alongside the component.
pub const VIEWER_CSS: &str = r"
.fullscreen-viewer {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.9);
    z-index: 9999;
    align-items: center;
    justify-content: center;
}
.viewer-container { position: relative; max-width: 90%; max-height: 90%; }
.viewer-image { max-width: 100%; max-height: 100%; object-fit: contain; }
.viewer-close, .viewer-prev, .viewer-next {
    position: absolute;
    background: rgba(255, 255, 255, 0.2);
    color: #fff;
    border: none;
    border-radius: 50%;
    font-size: 2rem;
    padding: 10px 15px;
    cursor: pointer;
    transition: background 0.3s ease;
}
.viewer-close:hover, .viewer-prev:hover, .viewer-next:hover { background: rgba(255, 255, 255, 0.4); }
.viewer-close { top: -50px; right: -50px; }
.viewer-prev { left: -60px; top: 50%; transform: translateY(-50%); }
.viewer-next { right: -60px; top: 50%; transform: translateY(-50%); }
.viewer-counter {
    position: absolute;
    bottom: -40px;
    left: 50%;
    transform: translateX(-50%);
    color: #fff;
    font-size: 1.1rem;
}
@media (max-width: 768px) {
    .viewer-close { top: 10px; right: 10px; font-size: 1.5rem; padding: 8px 12px; }
    .viewer-prev, .viewer-next { font-size: 1.5rem; padding: 8px 12px; }
    .viewer-prev { left: 10px; }
    .viewer-next { right: 10px; }
}
";

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn lock_page_scroll(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let value = if locked { "hidden" } else { "" };
            crate::util::dom::log_js_err(body.style().set_property("overflow", value), "body overflow");
        }
    }
}

/// Open at `index` and lock page scroll.
pub fn open_viewer(state: RwSignal<ViewerState>, index: usize) {
    if state.try_update(|s| s.open_at(index)).unwrap_or(false) {
        lock_page_scroll(true);
    }
}

/// Close and restore page scroll.
pub fn close_viewer(state: RwSignal<ViewerState>) {
    state.update(ViewerState::close);
    lock_page_scroll(false);
}

/// Route a key press while the viewer may be open.
pub fn handle_viewer_key(state: RwSignal<ViewerState>, key: &str) -> bool {
    let Some(key) = ViewerKey::from_key(key) else {
        return false;
    };
    if !state.with_untracked(ViewerState::is_open) {
        return false;
    }
    if key == ViewerKey::Close {
        close_viewer(state);
        return true;
    }
    state.try_update(|s| s.handle_key(key)).unwrap_or(false)
}

#[component]
pub fn FullscreenViewer(state: RwSignal<ViewerState>) -> impl IntoView {
    let total = state.with_untracked(ViewerState::len);

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        // Clicks inside the container bubble up here too; only the dimmed
        // backdrop itself closes.
        if ev.target() == ev.current_target() {
            close_viewer(state);
        }
    };

    view! {
        <div
            class="fullscreen-viewer"
            style:display=move || if state.with(ViewerState::is_open) { "flex" } else { "none" }
            on:click=on_backdrop
        >
            <div class="viewer-container">
                <button class="viewer-close" aria-label="Close" on:click=move |_| close_viewer(state)>
                    "×"
                </button>
                <button class="viewer-prev" aria-label="Previous" on:click=move |_| state.update(ViewerState::show_prev)>
                    "‹"
                </button>
                <button class="viewer-next" aria-label="Next" on:click=move |_| state.update(ViewerState::show_next)>
                    "›"
                </button>
                <img
                    class="viewer-image"
                    alt=""
                    src=move || state.with(|s| s.current_source().unwrap_or_default().to_owned())
                />
                <div class="viewer-counter">
                    <span class="current">{move || state.with(ViewerState::counter)}</span>
                    " / "
                    <span class="total">{total}</span>
                </div>
            </div>
        </div>
    }
}

/// Inject the stylesheet and append the overlay to `<body>`.
///
/// # Errors
///
/// Fails when the document has no head/body to attach to.
#[cfg(feature = "hydrate")]
pub fn mount(state: RwSignal<ViewerState>) -> Result<(), crate::error::SiteError> {
    use crate::error::SiteError;

    let document = crate::util::dom::document()?;
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_none() {
        let style = document.create_element("style")?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(VIEWER_CSS));
        document.head().ok_or_else(|| SiteError::missing("head"))?.append_child(&style)?;
    }
    let body = document.body().ok_or_else(|| SiteError::missing("body"))?;
    leptos::mount::mount_to(body, move || view! { <FullscreenViewer state/> }).forget();
    Ok(())
}
