//! Gallery filtering and caption search.
//!
//! DESIGN
//! ======
//! Filtering is a two-phase transition per item: an immediate step (show
//! the item in layout, or start fading it out) and a deferred step (fade it
//! in, or drop it from layout once the fade is visible). `FilterBoard`
//! tracks which selection each deferred step belongs to; a step from a
//! superseded selection is reported as stale and must not touch the DOM.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Whether an item with `category` passes `filter`. `all` is the sentinel
/// that matches everything, including uncategorized items.
#[must_use]
pub fn filter_matches(filter: &str, category: Option<&str>, all: &str) -> bool {
    filter == all || category == Some(filter)
}

/// Case-insensitive substring match against an item's caption.
#[must_use]
pub fn caption_matches(query: &str, title: &str, description: &str) -> bool {
    let needle = query.to_lowercase();
    title.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemTransition {
    Show,
    Hide,
}

/// Identifies one filter selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterGeneration(u64);

/// Layout/opacity state of one gallery item as the filter drives it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemDisplay {
    /// In layout and fully opaque.
    #[default]
    Visible,
    /// In layout, waiting for the fade-in step.
    Appearing,
    /// Still in layout, fading out.
    Disappearing,
    /// Removed from layout.
    Hidden,
}

impl ItemDisplay {
    /// Whether the item occupies layout.
    #[cfg(test)]
    pub(crate) fn in_layout(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBoard {
    all: String,
    categories: Vec<Option<String>>,
    displays: Vec<ItemDisplay>,
    generation: u64,
}

impl FilterBoard {
    /// Start with every item visible under the `all` filter.
    #[must_use]
    pub fn new(categories: Vec<Option<String>>, all: &str) -> Self {
        let displays = vec![ItemDisplay::Visible; categories.len()];
        Self { all: all.to_owned(), categories, displays, generation: 0 }
    }

    #[cfg(test)]
    pub(crate) fn display(&self, index: usize) -> Option<ItemDisplay> {
        self.displays.get(index).copied()
    }

    /// Items currently occupying layout.
    #[cfg(test)]
    pub(crate) fn in_layout_count(&self) -> usize {
        self.displays.iter().filter(|d| d.in_layout()).count()
    }

    /// Select a filter and return the immediate transition for every item.
    pub fn select(&mut self, filter: &str) -> (FilterGeneration, Vec<ItemTransition>) {
        self.generation += 1;
        let all = self.all.as_str();
        let transitions = self
            .categories
            .iter()
            .zip(self.displays.iter_mut())
            .map(|(category, display)| {
                if filter_matches(filter, category.as_deref(), all) {
                    *display = ItemDisplay::Appearing;
                    ItemTransition::Show
                } else {
                    *display = ItemDisplay::Disappearing;
                    ItemTransition::Hide
                }
            })
            .collect();
        (FilterGeneration(self.generation), transitions)
    }

    /// Run the deferred step for `index`. Returns `false` when the step is
    /// stale (a newer selection happened) and must be skipped.
    pub fn settle(&mut self, index: usize, generation: FilterGeneration) -> bool {
        if generation.0 != self.generation {
            return false;
        }
        let Some(display) = self.displays.get_mut(index) else {
            return false;
        };
        *display = match *display {
            ItemDisplay::Appearing | ItemDisplay::Visible => ItemDisplay::Visible,
            ItemDisplay::Disappearing | ItemDisplay::Hidden => ItemDisplay::Hidden,
        };
        true
    }
}
