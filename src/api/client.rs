use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    HttpStatus(StatusCode),
    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Thin wrapper over a shared `reqwest` client for JSON reads
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// The body is read in full before decoding so transport failures and
    /// malformed payloads surface as different variants.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(FetchError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
