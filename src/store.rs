use crate::config::UniquenessScope;
use crate::error::{ScoreError, ScoreResult};
use crate::scorer::{contribution, score_for, Category, ScoreItem};
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, warn};

/// Everything remembered about one player's score sheet.
#[derive(Debug, Clone, Default)]
struct PlayerSheet {
    // Indexed by `Category::index`. Each entry is the last selection recorded,
    // which is the baseline the next change is diffed against.
    selections: [Vec<ScoreItem>; Category::COUNT],
    long_destination_failed: bool,
    score: i32,
}

/// Per-player, per-category selections and the running scores they produce.
///
/// Scores are only ever moved by deltas. `contribution` recomputes a category
/// from scratch, and the two always agree.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    players: Vec<PlayerSheet>,
}

impl SelectionStore {
    pub fn new(player_count: usize) -> Self {
        let mut store = Self::default();
        store.reset_all(player_count);
        store
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Replaces a player's selection for one category and returns the score delta.
    ///
    /// Panics if `player` is out of range.
    pub fn record_selection(
        &mut self,
        player: usize,
        category: Category,
        new_selection: &[ScoreItem],
        toggle: Option<bool>,
    ) -> ScoreResult<i32> {
        let next = unique_items(new_selection);
        if !category.is_multi() && next.len() > 1 {
            return Err(ScoreError::Multiplicity {
                category: category.to_string(),
                got: next.len(),
            });
        }

        let sheet = &mut self.players[player];
        let previous = &sheet.selections[category.index()];

        let delta = if category.has_toggle() {
            let failed = toggle.unwrap_or(sheet.long_destination_failed);
            let delta = contribution(&next, category, failed)
                .saturating_sub(contribution(previous, category, sheet.long_destination_failed));
            sheet.long_destination_failed = failed;
            delta
        } else {
            let added = difference(&next, previous);
            let removed = difference(previous, &next);
            score_for(&added, category).saturating_sub(score_for(&removed, category))
        };

        sheet.score = sheet.score.saturating_add(delta);
        sheet.selections[category.index()] = next;

        debug!(
            "Player {} {}: delta {:+}, score {}",
            player, category, delta, sheet.score
        );
        Ok(delta)
    }

    /// Tag-keyed entry point used by the UI. Unknown tags change nothing.
    pub fn record_tagged(
        &mut self,
        player: usize,
        tag: &str,
        new_selection: &[ScoreItem],
        toggle: Option<bool>,
    ) -> ScoreResult<i32> {
        match Category::from_str(tag) {
            Ok(category) => self.record_selection(player, category, new_selection, toggle),
            Err(_) => {
                warn!("Ignoring selection for unknown category '{}'", tag);
                Ok(0)
            }
        }
    }

    /// Flips the sign of the long destination already applied to the score.
    pub fn toggle_long_destination(&mut self, player: usize, failed: bool) -> i32 {
        let sheet = &mut self.players[player];
        let current = &sheet.selections[Category::LongDestination.index()];

        let delta = contribution(current, Category::LongDestination, failed).saturating_sub(
            contribution(
                current,
                Category::LongDestination,
                sheet.long_destination_failed,
            ),
        );

        sheet.long_destination_failed = failed;
        sheet.score = sheet.score.saturating_add(delta);
        debug!(
            "Player {} long destination failed={}: delta {:+}",
            player, failed, delta
        );
        delta
    }

    pub fn reset_all(&mut self, player_count: usize) {
        self.players = vec![PlayerSheet::default(); player_count];
    }

    /// Keeps the sheets of players that remain and adds blank ones as needed.
    pub fn resize_players(&mut self, new_count: usize) {
        self.players.resize_with(new_count, PlayerSheet::default);
    }

    pub fn score(&self, player: usize) -> i32 {
        self.players[player].score
    }

    pub fn scores(&self) -> Vec<i32> {
        self.players.iter().map(|p| p.score).collect()
    }

    pub fn selection(&self, player: usize, category: Category) -> &[ScoreItem] {
        &self.players[player].selections[category.index()]
    }

    pub fn long_destination_failed(&self, player: usize) -> bool {
        self.players[player].long_destination_failed
    }

    /// The category's share of the player's score, computed from scratch.
    pub fn contribution(&self, player: usize, category: Category) -> i32 {
        let sheet = &self.players[player];
        contribution(
            &sheet.selections[category.index()],
            category,
            sheet.long_destination_failed,
        )
    }

    /// Items that must not be offered to `player` again under `scope`.
    pub fn taken_items(&self, scope: UniquenessScope, player: usize) -> Vec<&ScoreItem> {
        let sheets: Vec<&PlayerSheet> = match scope {
            UniquenessScope::Off => return Vec::new(),
            UniquenessScope::PerPlayer => vec![&self.players[player]],
            UniquenessScope::Global => self.players.iter().collect(),
        };

        let unique_slots: Vec<usize> = Category::iter()
            .filter(|c| c.is_unique())
            .map(|c| c.index())
            .collect();
        let slots = &unique_slots;

        sheets
            .into_iter()
            .flat_map(move |sheet| {
                slots
                    .iter()
                    .flat_map(move |&slot| sheet.selections[slot].iter())
            })
            .collect()
    }
}

/// Drops repeated items, keeping the first occurrence.
fn unique_items(items: &[ScoreItem]) -> Vec<ScoreItem> {
    let mut out: Vec<ScoreItem> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

fn difference(from: &[ScoreItem], remove: &[ScoreItem]) -> Vec<ScoreItem> {
    from.iter()
        .filter(|item| !remove.contains(item))
        .cloned()
        .collect()
}
