pub mod engine;
pub mod types;

pub use self::engine::{contribution, score_for, score_for_tag, STATION_COST};
pub use self::types::{Category, OptionPool, ScoreItem, Sign};
