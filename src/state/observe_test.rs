use super::*;

#[test]
fn new_set_is_all_pending() {
    let set = OneShotSet::new(3);
    assert_eq!(set.len(), 3);
    assert_eq!(set.pending_count(), 3);
    assert_eq!(set.state(0), Some(Observation::Pending));
    assert_eq!(set.state(3), None);
}

#[test]
fn trigger_fires_at_most_once_per_element() {
    let mut set = OneShotSet::new(2);
    assert!(set.trigger(1));
    assert!(!set.trigger(1));
    assert!(!set.trigger(1));
    assert_eq!(set.state(1), Some(Observation::Triggered));
    assert_eq!(set.state(0), Some(Observation::Pending));
    assert_eq!(set.pending_count(), 1);
}

#[test]
fn trigger_out_of_range_is_ignored() {
    let mut set = OneShotSet::new(1);
    assert!(!set.trigger(5));
    assert_eq!(set.pending_count(), 1);
}

#[test]
fn empty_set() {
    let mut set = OneShotSet::new(0);
    assert!(set.is_empty());
    assert!(!set.trigger(0));
}

#[test]
fn stagger_is_proportional_to_batch_position() {
    assert_eq!(stagger_delay_ms(0, 100), 0);
    assert_eq!(stagger_delay_ms(1, 100), 100);
    assert_eq!(stagger_delay_ms(4, 100), 400);
}

#[test]
fn stagger_saturates() {
    assert_eq!(stagger_delay_ms(usize::MAX, 100), u32::MAX);
}

fn entry(index: usize, intersecting: bool) -> BatchEntry {
    BatchEntry { index: Some(index), intersecting }
}

#[test]
fn batch_position_counts_non_intersecting_entries() {
    let mut set = OneShotSet::new(4);
    let fired = set.record_batch([entry(0, false), entry(1, true), entry(2, false), entry(3, true)]);
    assert_eq!(
        fired,
        vec![Fired { index: 1, batch_position: 1 }, Fired { index: 3, batch_position: 3 }]
    );
}

#[test]
fn batch_skips_already_triggered_and_untracked_entries() {
    let mut set = OneShotSet::new(2);
    assert!(set.trigger(0));
    let stranger = BatchEntry { index: None, intersecting: true };
    let fired = set.record_batch([entry(0, true), stranger, entry(1, true)]);
    assert_eq!(fired, vec![Fired { index: 1, batch_position: 2 }]);
    assert_eq!(set.pending_count(), 0);
}

#[test]
fn later_batches_never_refire() {
    let mut set = OneShotSet::new(1);
    assert_eq!(set.record_batch([entry(0, true)]).len(), 1);
    assert!(set.record_batch([entry(0, true)]).is_empty());
}
