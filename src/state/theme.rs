//! Light/dark theme preference.
//!
//! The applied theme lives in the `data-theme` attribute on `<body>` and the
//! persisted copy under the `theme` local storage key. `ThemeState` keeps
//! both in lockstep: every toggle returns the value that must be written to
//! both places.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Local storage key for the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Attribute carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored or applied value. Anything but `"dark"` is light.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button: offer the sun in dark mode.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "bi bi-moon-fill",
            Self::Dark => "bi bi-sun-fill",
        }
    }
}

/// Applied theme plus the last value persisted for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    applied: Theme,
    persisted: Option<Theme>,
}

impl ThemeState {
    /// Start from whatever storage held (if anything). Nothing is persisted
    /// at startup; the first toggle writes.
    #[must_use]
    pub fn from_storage(stored: Option<&str>) -> Self {
        Self { applied: Theme::parse(stored), persisted: stored.map(|raw| Theme::parse(Some(raw))) }
    }

    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied
    }

    #[must_use]
    pub fn persisted(&self) -> Option<Theme> {
        self.persisted
    }

    /// Flip the theme and record it as persisted. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.applied = self.applied.flipped();
        self.persisted = Some(self.applied);
        self.applied
    }
}
