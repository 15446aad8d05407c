use super::*;

fn categories(raw: &[&str]) -> Vec<Option<String>> {
    raw.iter().map(|c| Some((*c).to_owned())).collect()
}

fn settle_all(board: &mut FilterBoard, generation: FilterGeneration, len: usize) {
    for index in 0..len {
        assert!(board.settle(index, generation));
    }
}

// =============================================================
// filter_matches
// =============================================================

#[test]
fn all_sentinel_matches_everything() {
    assert!(filter_matches("all", Some("events"), "all"));
    assert!(filter_matches("all", None, "all"));
}

#[test]
fn filter_matches_iff_equal_category() {
    let filters = ["events", "labs", "workshops"];
    for filter in filters {
        for category in filters {
            assert_eq!(filter_matches(filter, Some(category), "all"), filter == category);
        }
        assert!(!filter_matches(filter, None, "all"));
    }
}

// =============================================================
// FilterBoard
// =============================================================

#[test]
fn workshops_filter_leaves_exactly_two_items_after_hide() {
    let cats = categories(&["workshops", "events", "labs", "workshops", "events"]);
    let mut board = FilterBoard::new(cats, "all");
    let (generation, transitions) = board.select("workshops");
    assert_eq!(
        transitions,
        vec![
            ItemTransition::Show,
            ItemTransition::Hide,
            ItemTransition::Hide,
            ItemTransition::Show,
            ItemTransition::Hide
        ]
    );
    // Hidden items keep their layout slot until the deferred step runs.
    assert_eq!(board.in_layout_count(), 5);
    settle_all(&mut board, generation, 5);
    assert_eq!(board.in_layout_count(), 2);
    assert_eq!(board.display(0), Some(ItemDisplay::Visible));
    assert_eq!(board.display(3), Some(ItemDisplay::Visible));
}

#[test]
fn stale_deferred_steps_are_dropped() {
    let cats = categories(&["labs", "events"]);
    let mut board = FilterBoard::new(cats, "all");
    let (first, _) = board.select("labs");
    let (second, _) = board.select("events");
    // The hide scheduled for item 1 by the first click must not fire.
    assert!(!board.settle(1, first));
    assert_eq!(board.display(1), Some(ItemDisplay::Appearing));
    settle_all(&mut board, second, 2);
    assert_eq!(board.display(0), Some(ItemDisplay::Hidden));
    assert_eq!(board.display(1), Some(ItemDisplay::Visible));
}

#[test]
fn back_to_all_restores_every_item() {
    let cats = categories(&["a", "b", "c"]);
    let mut board = FilterBoard::new(cats, "all");
    let (generation, _) = board.select("a");
    settle_all(&mut board, generation, 3);
    assert_eq!(board.in_layout_count(), 1);
    let (generation, transitions) = board.select("all");
    assert!(transitions.iter().all(|t| *t == ItemTransition::Show));
    settle_all(&mut board, generation, 3);
    assert_eq!(board.in_layout_count(), 3);
}

#[test]
fn settle_out_of_range_is_rejected() {
    let mut board = FilterBoard::new(categories(&["a"]), "all");
    let (generation, _) = board.select("a");
    assert!(!board.settle(9, generation));
}

// =============================================================
// caption_matches
// =============================================================

#[test]
fn caption_search_is_case_insensitive_over_title_and_description() {
    assert!(caption_matches("LAB", "Computer lab tour", ""));
    assert!(caption_matches("robot", "Open day", "Students demo a Robot arm"));
    assert!(!caption_matches("chess", "Open day", "Robotics"));
}

#[test]
fn empty_query_matches_everything() {
    assert!(caption_matches("", "", ""));
    assert!(caption_matches("", "Anything", "at all"));
}

#[test]
fn caption_search_handles_arabic_text() {
    assert!(caption_matches("ورشة", "ورشة عمل البرمجة", ""));
}
