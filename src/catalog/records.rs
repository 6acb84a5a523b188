use serde::{Deserialize, Serialize};

/// A destination ticket as served by the catalog API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecord {
    pub start: String,
    pub end: String,
    pub score: i32,
    #[serde(default)]
    pub is_long_destination: bool,
    pub map: String,
}

/// A claimable route as served by the catalog API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadRecord {
    pub start: String,
    pub end: String,
    pub score: i32,
    #[serde(default)]
    pub wagon_number: Option<u32>,
    #[serde(default)]
    pub locomotive: Option<u32>,
    pub map: String,
}

/// Envelope wrapped around every API payload.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// A record list that may or may not come wrapped in the API envelope.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum RecordList<T> {
    Envelope(ApiResponse<Vec<T>>),
    Bare(Vec<T>),
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::Bare(Vec::new())
    }
}

impl<T> RecordList<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Envelope(resp) => resp.data,
            Self::Bare(items) => items,
        }
    }
}

/// On-disk catalog: both lists in one JSON document.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct CatalogBundle {
    pub destinations: RecordList<DestinationRecord>,
    pub roads: RecordList<RoadRecord>,
}
