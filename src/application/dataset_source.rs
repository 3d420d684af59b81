// Dataset source trait - the one-shot fetch collaborator
use crate::domain::dataset::{Dataset, DatasetError};
use async_trait::async_trait;
use thiserror::Error;

/// Initialization failure. Fatal: the service refuses to start rather than
/// render with partial data. No retries.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),
    #[error("dataset request returned status {0}")]
    Status(u16),
    #[error("failed to decode dataset: {0}")]
    Decode(String),
    #[error("malformed dataset: {0}")]
    Malformed(#[from] DatasetError),
}

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and validate the dashboard dataset. Called exactly once at startup.
    async fn fetch(&self) -> Result<Dataset, InitError>;
}
