// HTTP dataset source - one-shot fetch of the precomputed dashboard document
use crate::application::dataset_source::{DatasetSource, InitError};
use crate::domain::dataset::Dataset;
use async_trait::async_trait;

pub struct HttpDatasetSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDatasetSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> Result<Dataset, InitError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| InitError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(InitError::Status(response.status().as_u16()));
        }

        let dataset: Dataset = response
            .json()
            .await
            .map_err(|e| InitError::Decode(e.to_string()))?;

        dataset.validate()?;
        Ok(dataset)
    }
}
