use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// A scoreable option as shown in a picker.
///
/// Two items are the same item when both the label and the point value match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreItem {
    pub points: i32,
    pub label: String,
}

impl ScoreItem {
    pub fn new(points: i32, label: impl Into<String>) -> Self {
        Self {
            points,
            label: label.into(),
        }
    }

    /// The label without its trailing " (score N)" suffix.
    pub fn name(&self) -> &str {
        match self.label.rfind(" (score ") {
            Some(idx) => &self.label[..idx],
            None => &self.label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Reward,
    Penalty,
}

/// Which catalog list a category draws its options from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionPool {
    LongDestinations,
    Destinations,
    Roads,
    TrainStations,
}

#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    EnumCount,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Category {
    LongDestination,
    DestinationCompleted,
    DestinationFailed,
    Roads,
    TrainStations,
}

impl Category {
    pub fn sign(&self) -> Sign {
        match self {
            Self::LongDestination | Self::DestinationCompleted | Self::Roads => Sign::Reward,
            Self::DestinationFailed | Self::TrainStations => Sign::Penalty,
        }
    }

    /// Single-select categories hold at most one item.
    pub fn is_multi(&self) -> bool {
        !matches!(self, Self::LongDestination)
    }

    /// Only the long destination carries the "not completed" toggle.
    pub fn has_toggle(&self) -> bool {
        matches!(self, Self::LongDestination)
    }

    pub fn pool(&self) -> OptionPool {
        match self {
            Self::LongDestination => OptionPool::LongDestinations,
            Self::DestinationCompleted | Self::DestinationFailed => OptionPool::Destinations,
            Self::Roads => OptionPool::Roads,
            Self::TrainStations => OptionPool::TrainStations,
        }
    }

    /// Categories whose items can only be claimed once across the table.
    /// Station tokens belong to each player and are never shared.
    pub fn is_unique(&self) -> bool {
        !matches!(self, Self::TrainStations)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
