//! Tunable thresholds and timings for every controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup may carry an inline
//! `<script type="application/json" id="site-config">` block overriding any
//! subset of these values. Everything not named there keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

/// Element id of the optional inline override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Options for one intersection observer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// CSS margin applied to the viewport root.
    pub root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { threshold: 0.0, root_margin: "0px".to_owned() }
    }
}

impl ObserverConfig {
    #[must_use]
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self { threshold, root_margin: root_margin.to_owned() }
    }
}

/// Page chrome thresholds (pixels).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub navbar_scrolled_after: f64,
    pub scroll_top_visible_after: f64,
    /// Fixed-header allowance subtracted from each section top.
    pub section_header_offset: f64,
    /// Navbar allowance for in-page anchor scrolling.
    pub anchor_scroll_offset: f64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_after: 50.0,
            scroll_top_visible_after: 300.0,
            section_header_offset: 100.0,
            anchor_scroll_offset: 80.0,
        }
    }
}

/// Counter animation and scroll-reveal settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_observer: ObserverConfig,
    pub reveal_observer: ObserverConfig,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            counter_observer: ObserverConfig::new(0.5, "0px 0px -100px 0px"),
            reveal_observer: ObserverConfig::new(0.1, "0px 0px -50px 0px"),
        }
    }
}

/// Banner lifetimes (milliseconds).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub success_ttl_ms: u32,
    pub error_ttl_ms: u32,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self { success_ttl_ms: 5000, error_ttl_ms: 7000 }
    }
}

/// Gallery timings and gates.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Filter value that matches every category.
    pub all_filter: String,
    pub filter_show_delay_ms: u32,
    pub filter_hide_delay_ms: u32,
    pub entrance_stagger_ms: u32,
    pub entrance_observer: ObserverConfig,
    /// The fullscreen viewer only initializes when the viewport is wider.
    pub fullscreen_min_width: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            all_filter: "all".to_owned(),
            filter_show_delay_ms: 50,
            filter_hide_delay_ms: 300,
            entrance_stagger_ms: 100,
            entrance_observer: ObserverConfig::new(0.1, "0px 0px -50px 0px"),
            fullscreen_min_width: 768.0,
        }
    }
}

/// Complete configuration for one page load.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub chrome: ChromeConfig,
    pub engagement: EngagementConfig,
    pub banners: BannerConfig,
    pub gallery: GalleryConfig,
}

impl SiteConfig {
    /// Parse an override block. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional override block, logging and falling back to
    /// defaults on malformed input.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring site config override: {e}");
                Self::default()
            }
        }
    }

    /// Read the override block from the current document.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            Self::from_json_or_default(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
