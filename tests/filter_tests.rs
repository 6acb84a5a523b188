mod common;

use common::item;
use ttrscore::filter::filter_available;
use ttrscore::scorer::ScoreItem;

fn options() -> Vec<ScoreItem> {
    vec![item(10, "A"), item(12, "B"), item(4, "C"), item(10, "D")]
}

#[test]
fn test_filter_removes_taken_items_in_order() {
    let all = options();
    let taken = vec![item(12, "B")];
    let available = filter_available(&all, &taken);
    assert_eq!(available, vec![item(10, "A"), item(4, "C"), item(10, "D")]);
}

#[test]
fn test_filter_matches_identity_not_points() {
    let all = options();
    // Same points as "A" and "D", different label: nothing is removed.
    let taken = vec![item(10, "Z")];
    assert_eq!(filter_available(&all, &taken), all);
}

#[test]
fn test_filter_with_nothing_taken_returns_everything() {
    let all = options();
    assert_eq!(filter_available(&all, &[]), all);
}

#[test]
fn test_filter_on_empty_catalog_is_empty() {
    let taken = vec![item(10, "A")];
    assert!(filter_available(&[], &taken).is_empty());
}
