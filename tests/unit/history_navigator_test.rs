use nekobrowser::managers::history_navigator::{
    HistoryNavigator, HistoryNavigatorTrait, DEFAULT_HISTORY_CAPACITY,
};
use nekobrowser::types::image::ImageEntry;
use rstest::rstest;

fn entry(id: &str) -> ImageEntry {
    ImageEntry::new(id)
}

fn ids(navigator: &HistoryNavigator) -> Vec<&str> {
    navigator.entries().iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn test_new_navigator_is_empty() {
    let navigator = HistoryNavigator::new();
    assert!(navigator.is_empty());
    assert_eq!(navigator.len(), 0);
    assert_eq!(navigator.cursor(), None);
    assert!(navigator.current().is_none());
    assert_eq!(navigator.capacity(), DEFAULT_HISTORY_CAPACITY);
}

#[test]
fn test_push_to_empty_sets_cursor_zero() {
    let mut navigator = HistoryNavigator::new();
    let cursor = navigator.push_entry(entry("a"));
    assert_eq!(cursor, 0);
    assert_eq!(navigator.cursor(), Some(0));
    assert_eq!(navigator.current().unwrap().id, "a");
}

#[test]
fn test_push_moves_cursor_to_newest() {
    let mut navigator = HistoryNavigator::new();
    navigator.push_entry(entry("a"));
    navigator.push_entry(entry("b"));
    let cursor = navigator.push_entry(entry("c"));
    assert_eq!(cursor, 2);
    assert_eq!(navigator.len(), 3);
    assert_eq!(navigator.current().unwrap().id, "c");
}

#[test]
fn test_fifth_push_evicts_oldest() {
    let mut navigator = HistoryNavigator::new();
    for id in ["a", "b", "c", "d"] {
        navigator.push_entry(entry(id));
    }
    assert_eq!(navigator.cursor(), Some(3));

    let cursor = navigator.push_entry(entry("e"));
    // Oldest dropped, cursor still addresses the just-appended entry.
    assert_eq!(ids(&navigator), vec!["b", "c", "d", "e"]);
    assert_eq!(cursor, 3);
    assert_eq!(navigator.current().unwrap().id, "e");
}

#[test]
fn test_push_mid_history_truncates_forward_entries() {
    let mut navigator = HistoryNavigator::new();
    navigator.push_entry(entry("a"));
    navigator.push_entry(entry("b"));
    navigator.push_entry(entry("c"));
    navigator.go_back(); // cursor now on "b"

    navigator.push_entry(entry("d"));
    // "c" was forward of the cursor and is discarded.
    assert_eq!(ids(&navigator), vec!["a", "b", "d"]);
    assert_eq!(navigator.cursor(), Some(2));
    assert_eq!(navigator.current().unwrap().id, "d");
}

#[test]
fn test_truncate_on_branch_keeps_capacity_slack() {
    let mut navigator = HistoryNavigator::new();
    for id in ["a", "b", "c", "d"] {
        navigator.push_entry(entry(id));
    }
    navigator.go_back();
    navigator.go_back(); // cursor on "b"

    navigator.push_entry(entry("e"));
    // Truncation removed "c" and "d", so no eviction is needed.
    assert_eq!(ids(&navigator), vec!["a", "b", "e"]);
    assert_eq!(navigator.cursor(), Some(2));
}

#[test]
fn test_go_back_twice_reaches_oldest() {
    let mut navigator = HistoryNavigator::new();
    navigator.push_entry(entry("a"));
    navigator.push_entry(entry("b"));
    navigator.push_entry(entry("c"));

    assert_eq!(navigator.go_back().unwrap().id, "b");
    assert_eq!(navigator.go_back().unwrap().id, "a");
    assert_eq!(navigator.cursor(), Some(0));
    assert!(!navigator.can_go_back());
}

#[test]
fn test_go_back_noop_at_oldest() {
    let mut navigator = HistoryNavigator::new();
    navigator.push_entry(entry("a"));
    assert!(navigator.go_back().is_none());
    assert_eq!(navigator.cursor(), Some(0));
    assert_eq!(navigator.len(), 1);
}

#[test]
fn test_go_back_noop_when_empty() {
    let mut navigator = HistoryNavigator::new();
    assert!(navigator.go_back().is_none());
    assert_eq!(navigator.cursor(), None);
}

#[test]
fn test_go_forward_replays_without_changing_len() {
    let mut navigator = HistoryNavigator::new();
    navigator.push_entry(entry("a"));
    navigator.push_entry(entry("b"));
    navigator.go_back();

    assert_eq!(navigator.go_forward().unwrap().id, "b");
    assert_eq!(navigator.len(), 2);
    assert_eq!(navigator.cursor(), Some(1));
}

#[test]
fn test_go_forward_noop_at_newest() {
    let mut navigator = HistoryNavigator::new();
    navigator.push_entry(entry("a"));
    assert!(navigator.go_forward().is_none());
    assert_eq!(navigator.cursor(), Some(0));
}

#[test]
fn test_go_forward_noop_when_empty() {
    let mut navigator = HistoryNavigator::new();
    assert!(navigator.go_forward().is_none());
    assert_eq!(navigator.cursor(), None);
}

#[test]
fn test_can_go_forward_tracks_forward_entries() {
    let mut navigator = HistoryNavigator::new();
    navigator.push_entry(entry("a"));
    navigator.push_entry(entry("b"));
    assert!(!navigator.can_go_forward());

    navigator.go_back();
    assert!(navigator.can_go_forward());
}

#[test]
fn test_capacity_bound_holds_under_many_pushes() {
    let mut navigator = HistoryNavigator::new();
    for i in 0..20 {
        navigator.push_entry(entry(&i.to_string()));
        assert!(navigator.len() <= DEFAULT_HISTORY_CAPACITY);
        assert_eq!(navigator.cursor(), Some(navigator.len() - 1));
    }
    assert_eq!(ids(&navigator), vec!["16", "17", "18", "19"]);
}

#[test]
fn test_with_capacity_floor_is_one() {
    let mut navigator = HistoryNavigator::with_capacity(0);
    assert_eq!(navigator.capacity(), 1);
    navigator.push_entry(entry("a"));
    navigator.push_entry(entry("b"));
    assert_eq!(ids(&navigator), vec!["b"]);
    assert_eq!(navigator.cursor(), Some(0));
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(4, true)]
fn test_can_go_back_after_pushes(#[case] pushes: usize, #[case] expected: bool) {
    let mut navigator = HistoryNavigator::new();
    for i in 0..pushes {
        navigator.push_entry(entry(&i.to_string()));
    }
    assert_eq!(navigator.can_go_back(), expected);
}
