#![allow(dead_code)]

use ttrscore::catalog::{CatalogSource, DestinationRecord, RoadRecord};
use ttrscore::error::{ScoreError, ScoreResult};
use ttrscore::scorer::ScoreItem;

pub fn item(points: i32, label: &str) -> ScoreItem {
    ScoreItem::new(points, label)
}

pub fn destination(start: &str, end: &str, score: i32, long: bool, map: &str) -> DestinationRecord {
    DestinationRecord {
        start: start.to_string(),
        end: end.to_string(),
        score,
        is_long_destination: long,
        map: map.to_string(),
    }
}

pub fn road(start: &str, end: &str, score: i32, map: &str) -> RoadRecord {
    RoadRecord {
        start: start.to_string(),
        end: end.to_string(),
        score,
        wagon_number: None,
        locomotive: None,
        map: map.to_string(),
    }
}

pub fn sample_destinations() -> Vec<DestinationRecord> {
    vec![
        destination("Los Angeles", "New York", 21, true, "USA"),
        destination("Seattle", "New York", 22, true, "USA"),
        destination("Duluth", "El Paso", 10, false, "USA"),
        destination("Boston", "Miami", 12, false, "USA"),
        destination("Denver", "El Paso", 4, false, "USA"),
        destination("Lisboa", "Danzig", 20, true, "Europe"),
        destination("Edinburgh", "Athina", 21, true, "Europe"),
        destination("Paris", "Wien", 8, false, "Europe"),
        destination("Berlin", "Roma", 9, false, "Europe"),
    ]
}

pub fn sample_roads() -> Vec<RoadRecord> {
    vec![
        road("Boston", "New York", 2, "USA"),
        road("Boston", "New York", 2, "USA"),
        road("Helena", "Seattle", 5, "USA"),
        road("Denver", "Kansas City", 7, "USA"),
        road("Paris", "Bruxelles", 2, "Europe"),
        road("Berlin", "Wien", 7, "Europe"),
    ]
}

/// Destinations in the API envelope, roads as a bare list.
pub fn sample_bundle_json() -> String {
    serde_json::json!({
        "destinations": {
            "message": "ok",
            "data": sample_destinations(),
        },
        "roads": sample_roads(),
    })
    .to_string()
}

/// In-memory catalog source. `fail_roads` makes the roads call error out.
pub struct StaticSource {
    pub destinations: Vec<DestinationRecord>,
    pub roads: Vec<RoadRecord>,
    pub fail_roads: bool,
}

impl StaticSource {
    pub fn sample() -> Self {
        Self {
            destinations: sample_destinations(),
            roads: sample_roads(),
            fail_roads: false,
        }
    }
}

impl CatalogSource for StaticSource {
    async fn destinations(&self) -> ScoreResult<Vec<DestinationRecord>> {
        Ok(self.destinations.clone())
    }

    async fn roads(&self) -> ScoreResult<Vec<RoadRecord>> {
        if self.fail_roads {
            return Err(ScoreError::Validation("roads unavailable".to_string()));
        }
        Ok(self.roads.clone())
    }
}
