use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Player count must be between {min} and {max}, got {got}")]
    PlayerCount { got: usize, min: usize, max: usize },

    #[error("Category '{category}' accepts a single item, got {got}")]
    Multiplicity { category: String, got: usize },

    #[error("No '{category}' option named '{label}'")]
    UnknownItem { category: String, label: String },

    #[error("'{label}' is already claimed, cannot add it to '{category}'")]
    AlreadyClaimed { category: String, label: String },

    #[error("Category '{category}' is not played on the {map} map")]
    CategoryUnavailable { category: String, map: String },
}

pub type ScoreResult<T> = Result<T, ScoreError>;
