use super::records::{ApiResponse, DestinationRecord, RoadRecord};
use super::CatalogSource;
use crate::error::ScoreResult;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for the Ticket to Ride REST API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ScoreResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("ttrscore/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_destinations(&self) -> ScoreResult<Vec<DestinationRecord>> {
        self.get_list("destinations").await
    }

    pub async fn get_roads(&self) -> ScoreResult<Vec<RoadRecord>> {
        self.get_list("roads").await
    }

    async fn get_list<T: DeserializeOwned>(&self, resource: &str) -> ScoreResult<Vec<T>> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?.error_for_status()?;
        let body: ApiResponse<Vec<T>> = resp.json().await?;
        debug!("{}: {} records ({})", resource, body.data.len(), body.message);
        Ok(body.data)
    }
}

impl CatalogSource for ApiClient {
    async fn destinations(&self) -> ScoreResult<Vec<DestinationRecord>> {
        self.get_destinations().await
    }

    async fn roads(&self) -> ScoreResult<Vec<RoadRecord>> {
        self.get_roads().await
    }
}
