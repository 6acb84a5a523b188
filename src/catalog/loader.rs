use super::records::{CatalogBundle, DestinationRecord, RoadRecord};
use super::Catalog;
use crate::error::ScoreResult;
use crate::maps::GameMap;
use crate::scorer::ScoreItem;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, warn};

/// Highest point value accepted for a single destination or road.
pub const MAX_RECORD_SCORE: i32 = 100;

/// Parses a catalog bundle from any JSON reader.
pub fn load_bundle<R: Read>(reader: R) -> ScoreResult<CatalogBundle> {
    let bundle: CatalogBundle = serde_json::from_reader(reader)?;
    Ok(bundle)
}

/// Keeps the records of `map` and turns them into picker options.
pub fn build_catalog(
    map: GameMap,
    destinations: &[DestinationRecord],
    roads: &[RoadRecord],
    stations_per_player: u32,
) -> Catalog {
    let on_map: Vec<&DestinationRecord> = destinations
        .iter()
        .filter(|d| map.matches_api_name(&d.map))
        .filter(|d| score_in_range("destination", &d.start, &d.end, d.score))
        .collect();

    let long_destinations = label_records(
        on_map
            .iter()
            .filter(|d| d.is_long_destination)
            .map(|d| (d.start.as_str(), d.end.as_str(), d.score)),
    );
    let short_destinations = label_records(
        on_map
            .iter()
            .filter(|d| !d.is_long_destination)
            .map(|d| (d.start.as_str(), d.end.as_str(), d.score)),
    );
    let road_items = label_records(
        roads
            .iter()
            .filter(|r| map.matches_api_name(&r.map))
            .filter(|r| score_in_range("road", &r.start, &r.end, r.score))
            .map(|r| (r.start.as_str(), r.end.as_str(), r.score)),
    );

    let train_stations = if map.has_train_stations() {
        station_tokens(stations_per_player)
    } else {
        Vec::new()
    };

    debug!(
        "Catalog for {}: {} long destinations, {} destinations, {} roads, {} stations",
        map,
        long_destinations.len(),
        short_destinations.len(),
        road_items.len(),
        train_stations.len()
    );

    Catalog {
        map,
        long_destinations,
        destinations: short_destinations,
        roads: road_items,
        train_stations,
    }
}

/// One token per station a player may place, each worth a single point.
pub fn station_tokens(count: u32) -> Vec<ScoreItem> {
    (1..=count)
        .map(|i| ScoreItem::new(1, format!("Station {}", i)))
        .collect()
}

pub fn format_label(name: &str, score: i32) -> String {
    format!("{} (score {})", name, score)
}

fn score_in_range(kind: &str, start: &str, end: &str, score: i32) -> bool {
    if (0..=MAX_RECORD_SCORE).contains(&score) {
        return true;
    }
    warn!(
        "Skipping {} {} ⇔ {} with out of range score {}",
        kind, start, end, score
    );
    false
}

// Double routes share both cities, so repeats get a "#n" suffix to stay distinct.
fn label_records<'a, I>(records: I) -> Vec<ScoreItem>
where
    I: Iterator<Item = (&'a str, &'a str, i32)>,
{
    let mut seen: HashMap<(&str, &str), usize> = HashMap::new();
    records
        .map(|(start, end, score)| {
            let count = seen.entry((start, end)).or_insert(0);
            *count += 1;

            let name = if *count == 1 {
                format!("{} ⇔ {}", start, end)
            } else {
                format!("{} ⇔ {} #{}", start, end, count)
            };
            ScoreItem::new(score, format_label(&name, score))
        })
        .collect()
}
