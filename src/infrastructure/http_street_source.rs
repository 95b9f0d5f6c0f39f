// HTTP street source - Fetches the street collection with reqwest
use crate::application::street_source::{FetchError, StreetSource};
use crate::domain::street::StreetRecord;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpStreetSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpStreetSource {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl StreetSource for HttpStreetSource {
    async fn fetch_streets(&self) -> Result<Vec<StreetRecord>, FetchError> {
        tracing::debug!("Requesting streets from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Street endpoint {} answered {}", self.endpoint, status);
            return Err(FetchError::Protocol {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let records: Vec<StreetRecord> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!("Parsed {} street records", records.len());
        Ok(records)
    }
}
