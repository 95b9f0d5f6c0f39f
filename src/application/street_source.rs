// Street source trait for the remote street collection
use crate::domain::street::StreetRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Why a street collection request failed. Callers only display it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("Network response was not ok (status {status})")]
    Protocol { status: u16 },

    #[error("could not parse street data: {0}")]
    Parse(String),
}

#[async_trait]
pub trait StreetSource: Send + Sync {
    /// Fetch the whole street collection, in the order the source returns it
    async fn fetch_streets(&self) -> Result<Vec<StreetRecord>, FetchError>;
}
