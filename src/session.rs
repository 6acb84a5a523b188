use crate::catalog::Catalog;
use crate::config::{ScoringRules, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{ScoreError, ScoreResult};
use crate::events::GameEvent;
use crate::filter::filter_available;
use crate::maps::GameMap;
use crate::scorer::{Category, ScoreItem};
use crate::store::SelectionStore;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Identifies the catalog request issued for one map change.
///
/// Only the ticket from the most recent map change is honoured, so a slow
/// response for an earlier map cannot replace the current catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTicket {
    pub map: GameMap,
    generation: u64,
}

/// Owns the whole score sheet: active map, catalog, selections and bonuses.
pub struct ScoreSession {
    rules: ScoringRules,
    map: GameMap,
    store: SelectionStore,
    catalog: Catalog,
    generation: u64,
    longest_route: Option<usize>,
}

impl ScoreSession {
    pub fn new(rules: ScoringRules) -> Self {
        let map = GameMap::default();
        Self {
            rules,
            map,
            store: SelectionStore::new(MIN_PLAYERS),
            catalog: Catalog::empty(map),
            generation: 0,
            longest_route: None,
        }
    }

    // --- Handlers ---

    /// Switches map, wipes every selection and returns the ticket the
    /// catalog response must present.
    pub fn on_map_changed(&mut self, map: GameMap) -> CatalogTicket {
        self.map = map;
        self.store.reset_all(self.store.player_count());
        self.catalog = Catalog::empty(map);
        self.longest_route = None;
        self.generation += 1;

        info!("Map changed to {}, scores reset", map);
        CatalogTicket {
            map,
            generation: self.generation,
        }
    }

    /// Installs a fetched catalog. Returns false if the ticket is stale.
    pub fn apply_catalog(&mut self, ticket: CatalogTicket, catalog: Catalog) -> bool {
        if ticket.generation != self.generation || ticket.map != self.map {
            debug!(
                "Discarding stale {} catalog (request {}, current {})",
                ticket.map, ticket.generation, self.generation
            );
            return false;
        }
        if catalog.map != ticket.map {
            warn!(
                "Catalog for {} delivered against a {} request, discarding",
                catalog.map, ticket.map
            );
            return false;
        }

        self.catalog = catalog;
        true
    }

    pub fn on_player_count_changed(&mut self, count: usize) -> ScoreResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ScoreError::PlayerCount {
                got: count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        self.store.resize_players(count);
        if self.longest_route.is_some_and(|holder| holder >= count) {
            self.longest_route = None;
        }
        debug!("Player count set to {}", count);
        Ok(())
    }

    pub fn select(
        &mut self,
        player: usize,
        category: Category,
        items: &[ScoreItem],
        toggle: Option<bool>,
    ) -> ScoreResult<i32> {
        self.check_player(player)?;
        self.check_category(category)?;
        self.check_unclaimed(player, category, items)?;
        self.store.record_selection(player, category, items, toggle)
    }

    /// Selects catalog options by label for a category given as a UI tag.
    ///
    /// A label matches either the full option label or its route name
    /// (`"Boston ⇔ Miami"`). Unknown tags are ignored.
    pub fn select_labels(
        &mut self,
        player: usize,
        tag: &str,
        labels: &[String],
        toggle: Option<bool>,
    ) -> ScoreResult<i32> {
        let category = match Category::from_str(tag) {
            Ok(c) => c,
            Err(_) => {
                warn!("Ignoring selection for unknown category '{}'", tag);
                return Ok(0);
            }
        };

        let options = self.catalog.options(category);
        let items = labels
            .iter()
            .map(|label| {
                find_option(options, label)
                    .cloned()
                    .ok_or_else(|| ScoreError::UnknownItem {
                        category: category.to_string(),
                        label: label.clone(),
                    })
            })
            .collect::<ScoreResult<Vec<_>>>()?;

        self.select(player, category, &items, toggle)
    }

    pub fn toggle_long_destination(&mut self, player: usize, failed: bool) -> ScoreResult<i32> {
        self.check_player(player)?;
        Ok(self.store.toggle_long_destination(player, failed))
    }

    /// Gives or takes the longest route bonus. Only one player holds it.
    pub fn set_longest_route(&mut self, player: usize, held: bool) -> ScoreResult<i32> {
        self.check_player(player)?;
        let before = self.total_score(player);

        if held {
            if let Some(previous) = self.longest_route.filter(|&p| p != player) {
                debug!("Longest route moves from player {} to {}", previous, player);
            }
            self.longest_route = Some(player);
        } else if self.longest_route == Some(player) {
            self.longest_route = None;
        }

        Ok(self.total_score(player).saturating_sub(before))
    }

    /// Replays one recorded interaction. A map change hands back the ticket
    /// for the catalog fetch it requires.
    pub fn apply(&mut self, event: &GameEvent) -> ScoreResult<Option<CatalogTicket>> {
        match event {
            GameEvent::MapChanged { map } => return Ok(Some(self.on_map_changed(*map))),
            GameEvent::PlayerCountChanged { count } => self.on_player_count_changed(*count)?,
            GameEvent::SelectionChanged {
                player,
                category,
                items,
                failed,
            } => {
                self.select_labels(*player, category, items, *failed)?;
            }
            GameEvent::LongDestinationToggled { player, failed } => {
                self.toggle_long_destination(*player, *failed)?;
            }
            GameEvent::LongestRouteChanged { player, held } => {
                self.set_longest_route(*player, *held)?;
            }
        }
        Ok(None)
    }

    // --- Outputs ---

    pub fn map(&self) -> GameMap {
        self.map
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn player_count(&self) -> usize {
        self.store.player_count()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn longest_route_holder(&self) -> Option<usize> {
        self.longest_route
    }

    pub fn selection(&self, player: usize, category: Category) -> &[ScoreItem] {
        self.store.selection(player, category)
    }

    /// Category score plus the longest route bonus.
    pub fn total_score(&self, player: usize) -> i32 {
        let bonus = if self.longest_route == Some(player) {
            self.rules.longest_route_bonus
        } else {
            0
        };
        self.store.score(player).saturating_add(bonus)
    }

    pub fn total_scores(&self) -> Vec<i32> {
        (0..self.player_count())
            .map(|p| self.total_score(p))
            .collect()
    }

    /// Options still offered to `player` in `category` after claimed
    /// destinations and roads are taken out.
    pub fn available_options(&self, player: usize, category: Category) -> Vec<ScoreItem> {
        let all = self.catalog.options(category);
        if !category.is_unique() {
            return all.to_vec();
        }
        filter_available(all, self.store.taken_items(self.rules.uniqueness, player))
    }

    fn check_player(&self, player: usize) -> ScoreResult<()> {
        if player >= self.player_count() {
            return Err(ScoreError::Validation(format!(
                "Player {} does not exist ({} players)",
                player,
                self.player_count()
            )));
        }
        Ok(())
    }

    // Items already in this player's selection for `category` stay allowed.
    fn check_unclaimed(
        &self,
        player: usize,
        category: Category,
        items: &[ScoreItem],
    ) -> ScoreResult<()> {
        if !category.is_unique() {
            return Ok(());
        }

        let own = self.store.selection(player, category);
        let taken = self.store.taken_items(self.rules.uniqueness, player);
        match items
            .iter()
            .find(|item| !own.contains(item) && taken.contains(item))
        {
            Some(item) => Err(ScoreError::AlreadyClaimed {
                category: category.to_string(),
                label: item.label.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_category(&self, category: Category) -> ScoreResult<()> {
        if category == Category::TrainStations && !self.map.has_train_stations() {
            return Err(ScoreError::CategoryUnavailable {
                category: category.to_string(),
                map: self.map.to_string(),
            });
        }
        Ok(())
    }
}

fn find_option<'a>(options: &'a [ScoreItem], label: &str) -> Option<&'a ScoreItem> {
    let wanted = label.trim();
    options
        .iter()
        .find(|o| o.label == wanted)
        .or_else(|| options.iter().find(|o| o.name().eq_ignore_ascii_case(wanted)))
}
