//! Fullscreen image viewer cursor.
//!
//! The image list is collected once at initialization; navigation wraps in
//! both directions. An empty list can never open.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKey {
    Close,
    Prev,
    Next,
}

impl ViewerKey {
    /// Map a `KeyboardEvent.key` value to a viewer command.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerState {
    sources: Vec<String>,
    index: usize,
    open: bool,
}

impl ViewerState {
    #[must_use]
    pub fn new(sources: Vec<String>) -> Self {
        Self { sources, index: 0, open: false }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// Image shown at the cursor.
    #[must_use]
    pub fn current_source(&self) -> Option<&str> {
        self.sources.get(self.index).map(String::as_str)
    }

    /// One-based position for the `current / total` label.
    #[must_use]
    pub fn counter(&self) -> usize {
        self.index + 1
    }

    /// Open at `index`. Out-of-range indexes and empty lists are ignored.
    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.sources.len() {
            return false;
        }
        self.index = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn show_next(&mut self) {
        if let Some(len) = self.nonzero_len() {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn show_prev(&mut self) {
        if let Some(len) = self.nonzero_len() {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Apply a keyboard command. Keys do nothing while closed; returns
    /// whether the key was consumed.
    pub fn handle_key(&mut self, key: ViewerKey) -> bool {
        if !self.open {
            return false;
        }
        match key {
            ViewerKey::Close => self.close(),
            ViewerKey::Prev => self.show_prev(),
            ViewerKey::Next => self.show_next(),
        }
        true
    }

    fn nonzero_len(&self) -> Option<usize> {
        (!self.sources.is_empty()).then_some(self.sources.len())
    }
}
