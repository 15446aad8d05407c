//! Stacked, dismissible, auto-expiring notification banners.

#[cfg(test)]
#[path = "banner_stack_test.rs"]
mod banner_stack_test;

use leptos::prelude::*;

use crate::config::BannerConfig;
use crate::state::banner::{BannerId, BannerKind, BannerStack};

/// Handle for raising banners from any controller. Cheap to copy.
#[derive(Clone, Copy)]
pub struct Notifier {
    stack: RwSignal<BannerStack>,
    success_ttl_ms: u32,
    error_ttl_ms: u32,
}

impl Notifier {
    #[must_use]
    pub fn new(config: &BannerConfig) -> Self {
        Self {
            stack: RwSignal::new(BannerStack::default()),
            success_ttl_ms: BannerKind::Success.ttl_ms(config),
            error_ttl_ms: BannerKind::Error.ttl_ms(config),
        }
    }

    /// Show a banner and schedule its expiry.
    pub fn notify(self, kind: BannerKind, message: impl Into<String>) -> Option<BannerId> {
        let message = message.into();
        let id = self.stack.try_update(|stack| stack.push(kind, message))?;
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(self.ttl_ms(kind), move || self.dismiss(id)).forget();
        }
        Some(id)
    }

    pub fn dismiss(self, id: BannerId) {
        self.stack.update(|stack| {
            stack.dismiss(id);
        });
    }

    #[cfg(test)]
    pub(crate) fn banners(self) -> Vec<crate::state::banner::Banner> {
        self.stack.with_untracked(|stack| stack.banners().to_vec())
    }

    #[must_use]
    pub fn ttl_ms(self, kind: BannerKind) -> u32 {
        match kind {
            BannerKind::Success => self.success_ttl_ms,
            BannerKind::Error => self.error_ttl_ms,
        }
    }
}

/// Fixed top-right column of Bootstrap alerts.
#[component]
pub fn Banners(notifier: Notifier) -> impl IntoView {
    view! {
        <div
            class="site-banners position-fixed"
            style="top: 100px; right: 20px; z-index: 9999; max-width: 400px;"
            aria-live="polite"
        >
            <For
                each=move || notifier.stack.with(|stack| stack.banners().to_vec())
                key=|banner| banner.id
                children=move |banner| {
                    let id = banner.id;
                    view! {
                        <div
                            class=format!("alert {} alert-dismissible fade show", banner.kind.alert_class())
                            role="alert"
                            style="white-space: pre-line;"
                        >
                            {banner.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| notifier.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Append the banner column to `<body>`.
///
/// # Errors
///
/// Fails when there is no document body to mount into.
#[cfg(feature = "hydrate")]
pub fn mount(notifier: Notifier) -> Result<(), crate::error::SiteError> {
    let body = crate::util::dom::document()?
        .body()
        .ok_or_else(|| crate::error::SiteError::missing("body"))?;
    leptos::mount::mount_to(body, move || view! { <Banners notifier/> }).forget();
    Ok(())
}
