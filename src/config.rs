use crate::error::{ScoreError, ScoreResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

pub const DEFAULT_API_URL: &str = "https://ticket-to-ride-api-rest-node-js.onrender.com/api";

/// Smallest and largest table the score sheet supports.
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[command(flatten)]
    pub api: ApiParams,
    #[command(flatten)]
    pub rules: ScoringRules,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiParams {
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl Default for ApiParams {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Who an already-claimed destination or road is hidden from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, ValueEnum, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum UniquenessScope {
    /// Hidden from every player once anyone claims it.
    #[default]
    Global,
    /// Hidden only from the player who claimed it.
    PerPlayer,
    /// Never hidden.
    Off,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    #[arg(long, global = true, default_value_t = 10)]
    pub longest_route_bonus: i32,
    #[arg(long, global = true, default_value_t = 3)]
    pub stations_per_player: u32,
    #[arg(long, global = true, value_enum, default_value_t = UniquenessScope::Global)]
    pub uniqueness: UniquenessScope,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            longest_route_bonus: 10,
            stations_per_player: 3,
            uniqueness: UniquenessScope::Global,
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ScoreResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScoreError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ScoreResult<()> {
        if self.api.api_url.trim().is_empty() {
            return Err(ScoreError::Config("api_url must not be empty".to_string()));
        }
        if self.rules.longest_route_bonus < 0 {
            return Err(ScoreError::Config(format!(
                "longest_route_bonus must not be negative, got {}",
                self.rules.longest_route_bonus
            )));
        }
        Ok(())
    }

    /// Copies every flag the user typed explicitly over the file values.
    pub fn merge_from_cli(&mut self, cli: &AppConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(api.api_url);
        update_if_present!(rules.longest_route_bonus);
        update_if_present!(rules.stations_per_player);
        update_if_present!(rules.uniqueness);
    }
}
