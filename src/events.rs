use crate::maps::GameMap;
use serde::{Deserialize, Serialize};

/// One interaction from the score sheet, in the order the user made it.
///
/// `category` stays a plain string so scripts carrying an unknown tag still
/// parse; the session ignores those selections.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    MapChanged {
        map: GameMap,
    },
    PlayerCountChanged {
        count: usize,
    },
    SelectionChanged {
        player: usize,
        category: String,
        #[serde(default)]
        items: Vec<String>,
        #[serde(default)]
        failed: Option<bool>,
    },
    LongDestinationToggled {
        player: usize,
        failed: bool,
    },
    LongestRouteChanged {
        player: usize,
        held: bool,
    },
}

pub fn load_events<R: std::io::Read>(reader: R) -> crate::error::ScoreResult<Vec<GameEvent>> {
    Ok(serde_json::from_reader(reader)?)
}
