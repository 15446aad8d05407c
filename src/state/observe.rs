//! One-shot visibility triggers.
//!
//! Counters, reveal animations, gallery entrances and lazy images all react
//! to the *first* time an element scrolls into view and never again. The
//! DOM observer is told to stop watching after the first hit, but the
//! at-most-once guarantee comes from this state machine: a slot moves from
//! `Pending` to `Triggered` exactly once.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Observation {
    #[default]
    Pending,
    Triggered,
}

/// Per-element trigger state, indexed by the element's position in the list
/// collected at initialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OneShotSet {
    slots: Vec<Observation>,
}

impl OneShotSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { slots: vec![Observation::Pending; len] }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn state(&self, index: usize) -> Option<Observation> {
        self.slots.get(index).copied()
    }

    /// Record an intersection for `index`. Returns `true` only on the
    /// `Pending -> Triggered` transition; repeats and unknown indexes return
    /// `false`.
    pub fn trigger(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ Observation::Pending) => {
                *slot = Observation::Triggered;
                true
            }
            _ => false,
        }
    }

    /// Apply one observer callback batch. Returns the elements that fired,
    /// in batch order. `batch_position` counts every delivered entry,
    /// including ones that are not intersecting or not tracked.
    pub fn record_batch<I>(&mut self, entries: I) -> Vec<Fired>
    where
        I: IntoIterator<Item = BatchEntry>,
    {
        entries
            .into_iter()
            .enumerate()
            .filter(|(_, entry)| entry.intersecting)
            .filter_map(|(batch_position, entry)| {
                let index = entry.index?;
                self.trigger(index).then_some(Fired { index, batch_position })
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn pending_count(&self) -> usize {
        self.slots.iter().filter(|slot| **slot == Observation::Pending).count()
    }
}

/// One entry delivered to an observer callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchEntry {
    /// Position of the target in the tracked list; `None` for strangers.
    pub index: Option<usize>,
    pub intersecting: bool,
}

/// A first intersection: tracked index and position within its batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    pub index: usize,
    pub batch_position: usize,
}

/// Delay before the `position`-th entry of one intersection batch starts
/// its entrance animation.
#[must_use]
pub fn stagger_delay_ms(position: usize, step_ms: u32) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX).saturating_mul(step_ms)
}
