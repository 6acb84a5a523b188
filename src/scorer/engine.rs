use super::types::{Category, ScoreItem, Sign};
use std::str::FromStr;
use tracing::warn;

/// Points lost for every train station placed.
pub const STATION_COST: i32 = 4;

/// Signed score of a set of items in one category.
pub fn score_for(items: &[ScoreItem], category: Category) -> i32 {
    let scale = match category {
        Category::TrainStations => STATION_COST,
        _ => 1,
    };
    // Saturates rather than overflowing on hostile point values.
    let total = items
        .iter()
        .fold(0i32, |acc, item| acc.saturating_add(item.points.saturating_mul(scale)));

    match category.sign() {
        Sign::Reward => total,
        Sign::Penalty => total.saturating_neg(),
    }
}

/// Same as [`score_for`] but keyed by the UI tag. Unknown tags score 0.
pub fn score_for_tag(items: &[ScoreItem], tag: &str) -> i32 {
    match Category::from_str(tag) {
        Ok(category) => score_for(items, category),
        Err(_) => {
            warn!("Unknown category tag '{}', scoring 0", tag);
            0
        }
    }
}

/// What a category currently adds to a player's total, including the
/// long destination "not completed" flip.
pub fn contribution(items: &[ScoreItem], category: Category, failed: bool) -> i32 {
    let score = score_for(items, category);
    if category.has_toggle() && failed {
        score.saturating_neg()
    } else {
        score
    }
}
