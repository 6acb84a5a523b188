use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMap {
    #[default]
    #[strum(serialize = "USA")]
    #[serde(rename = "USA", alias = "usa")]
    Usa,
    #[strum(serialize = "Europe")]
    #[serde(rename = "Europe", alias = "europe")]
    Europe,
}

impl GameMap {
    /// Train stations only exist on the European board.
    pub fn has_train_stations(&self) -> bool {
        matches!(self, Self::Europe)
    }

    /// The `map` value the catalog API tags its records with.
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Europe => "Europe",
        }
    }

    pub fn matches_api_name(&self, name: &str) -> bool {
        self.api_name().eq_ignore_ascii_case(name.trim())
    }
}

pub fn get_all_maps() -> Vec<GameMap> {
    GameMap::iter().collect()
}
