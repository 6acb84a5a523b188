pub mod client;
pub mod file;
pub mod loader;
pub mod records;

pub use self::client::ApiClient;
pub use self::file::FileSource;
pub use self::records::{DestinationRecord, RoadRecord};

use crate::config::ScoringRules;
use crate::error::ScoreResult;
use crate::maps::GameMap;
use crate::scorer::{Category, OptionPool, ScoreItem};
use serde::Serialize;
use tracing::{error, info};

/// The option lists for one map. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub map: GameMap,
    pub long_destinations: Vec<ScoreItem>,
    pub destinations: Vec<ScoreItem>,
    pub roads: Vec<ScoreItem>,
    pub train_stations: Vec<ScoreItem>,
}

impl Catalog {
    pub fn empty(map: GameMap) -> Self {
        Self {
            map,
            ..Default::default()
        }
    }

    pub fn pool(&self, pool: OptionPool) -> &[ScoreItem] {
        match pool {
            OptionPool::LongDestinations => &self.long_destinations,
            OptionPool::Destinations => &self.destinations,
            OptionPool::Roads => &self.roads,
            OptionPool::TrainStations => &self.train_stations,
        }
    }

    pub fn options(&self, category: Category) -> &[ScoreItem] {
        self.pool(category.pool())
    }

    pub fn is_empty(&self) -> bool {
        self.long_destinations.is_empty() && self.destinations.is_empty() && self.roads.is_empty()
    }
}

/// Where destination and road records come from.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn destinations(&self) -> ScoreResult<Vec<DestinationRecord>>;
    async fn roads(&self) -> ScoreResult<Vec<RoadRecord>>;
}

/// Fetches both lists and builds the catalog for `map`.
///
/// A list that fails to load is logged and left empty; this never fails.
pub async fn load_catalog<S: CatalogSource>(
    source: &S,
    map: GameMap,
    rules: &ScoringRules,
) -> Catalog {
    let (destinations, roads) = tokio::join!(source.destinations(), source.roads());

    let destinations = destinations.unwrap_or_else(|e| {
        error!("Failed to fetch destinations: {}", e);
        Vec::new()
    });
    let roads = roads.unwrap_or_else(|e| {
        error!("Failed to fetch roads: {}", e);
        Vec::new()
    });

    let catalog = loader::build_catalog(map, &destinations, &roads, rules.stations_per_player);
    info!(
        "Loaded {} catalog: {} long destinations, {} destinations, {} roads",
        map,
        catalog.long_destinations.len(),
        catalog.destinations.len(),
        catalog.roads.len()
    );
    catalog
}
