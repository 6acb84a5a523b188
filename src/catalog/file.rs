use super::loader::load_bundle;
use super::records::{CatalogBundle, DestinationRecord, RoadRecord};
use super::CatalogSource;
use crate::error::{ScoreError, ScoreResult};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Serves the catalog from a local JSON bundle instead of the API.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn read_bundle(&self) -> ScoreResult<CatalogBundle> {
        let content = tokio::fs::read(&self.path).await.map_err(|e| {
            ScoreError::Config(format!(
                "Could not open catalog file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        load_bundle(Cursor::new(content))
    }
}

impl CatalogSource for FileSource {
    async fn destinations(&self) -> ScoreResult<Vec<DestinationRecord>> {
        Ok(self.read_bundle().await?.destinations.into_vec())
    }

    async fn roads(&self) -> ScoreResult<Vec<RoadRecord>> {
        Ok(self.read_bundle().await?.roads.into_vec())
    }
}
