mod common;

use common::item;
use rstest::rstest;
use std::str::FromStr;
use ttrscore::scorer::{contribution, score_for, score_for_tag, Category, ScoreItem, STATION_COST};

fn items(points: &[i32]) -> Vec<ScoreItem> {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| item(p, &format!("item {}", i)))
        .collect()
}

// --- RULE TABLE ---
#[rstest]
#[case(Category::LongDestination, &[20], 20)]
#[case(Category::DestinationCompleted, &[10, 4], 14)]
#[case(Category::DestinationFailed, &[10, 4], -14)]
#[case(Category::Roads, &[2, 7, 15], 24)]
#[case(Category::TrainStations, &[1, 1, 1], -12)]
fn test_score_for_rule_table(
    #[case] category: Category,
    #[case] points: &[i32],
    #[case] expected: i32,
) {
    assert_eq!(score_for(&items(points), category), expected);
}

#[rstest]
#[case(Category::LongDestination)]
#[case(Category::DestinationCompleted)]
#[case(Category::DestinationFailed)]
#[case(Category::Roads)]
#[case(Category::TrainStations)]
fn test_empty_selection_scores_zero(#[case] category: Category) {
    assert_eq!(score_for(&[], category), 0);
}

#[test]
fn test_station_cost_scales_each_station() {
    for n in 0..=3 {
        let stations = items(&vec![1; n]);
        assert_eq!(
            score_for(&stations, Category::TrainStations),
            -STATION_COST * n as i32
        );
    }
}

#[test]
fn test_score_for_is_repeatable() {
    let picked = items(&[8, 9]);
    let first = score_for(&picked, Category::Roads);
    let second = score_for(&picked, Category::Roads);
    assert_eq!(first, second);
}

#[test]
fn test_huge_point_values_saturate() {
    let hostile = vec![item(i32::MAX, "a"), item(1, "b")];
    assert_eq!(score_for(&hostile, Category::Roads), i32::MAX);
    assert_eq!(score_for(&hostile, Category::DestinationFailed), -i32::MAX);
    assert_eq!(score_for(&hostile, Category::TrainStations), -i32::MAX);
    assert_eq!(contribution(&hostile, Category::LongDestination, true), -i32::MAX);
}

// --- TAGS ---
#[rstest]
#[case("longDestination", Category::LongDestination)]
#[case("destinationCompleted", Category::DestinationCompleted)]
#[case("destinationFailed", Category::DestinationFailed)]
#[case("roads", Category::Roads)]
#[case("trainStations", Category::TrainStations)]
fn test_category_tags_round_trip(#[case] tag: &str, #[case] category: Category) {
    assert_eq!(Category::from_str(tag).unwrap(), category);
    assert_eq!(category.to_string(), tag);
}

#[test]
fn test_unknown_tag_scores_zero() {
    assert_eq!(score_for_tag(&items(&[10]), "longestRoad"), 0);
    assert_eq!(score_for_tag(&items(&[10]), "destinationFailed"), -10);
}

// --- TOGGLE ---
#[test]
fn test_contribution_flips_only_long_destination() {
    let picked = items(&[20]);
    assert_eq!(contribution(&picked, Category::LongDestination, false), 20);
    assert_eq!(contribution(&picked, Category::LongDestination, true), -20);
    // The flag means nothing for other categories.
    assert_eq!(contribution(&picked, Category::Roads, true), 20);
}

#[test]
fn test_item_name_strips_score_suffix() {
    let dest = item(12, "Boston ⇔ Miami (score 12)");
    assert_eq!(dest.name(), "Boston ⇔ Miami");
    let station = item(1, "Station 2");
    assert_eq!(station.name(), "Station 2");
}
