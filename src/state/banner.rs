//! Transient notification banners.
//!
//! Banners stack in arrival order, can be dismissed individually, and expire
//! on their own after a per-kind lifetime. Dismissing an id that already
//! expired is a no-op, so the expiry timer and the close button never race.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::config::BannerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// Bootstrap alert modifier class.
    #[must_use]
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-danger",
        }
    }

    #[must_use]
    pub fn ttl_ms(self, config: &BannerConfig) -> u32 {
        match self {
            Self::Success => config.success_ttl_ms,
            Self::Error => config.error_ttl_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    /// Message text; may span several lines.
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerStack {
    next_id: u64,
    banners: Vec<Banner>,
}

impl BannerStack {
    /// Append a banner and return its id for the expiry timer.
    pub fn push(&mut self, kind: BannerKind, message: impl Into<String>) -> BannerId {
        let id = BannerId(self.next_id);
        self.next_id += 1;
        self.banners.push(Banner { id, kind, message: message.into() });
        id
    }

    /// Remove a banner. Returns whether it was still showing.
    pub fn dismiss(&mut self, id: BannerId) -> bool {
        let before = self.banners.len();
        self.banners.retain(|banner| banner.id != id);
        self.banners.len() != before
    }

    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    #[cfg(test)]
    pub(crate) fn count(&self, kind: BannerKind) -> usize {
        self.banners.iter().filter(|banner| banner.kind == kind).count()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}
