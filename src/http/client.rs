//! Thin JSON-over-HTTP client used by the providers.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::check_status;

/// HTTP client wrapper that decodes JSON bodies and classifies error statuses.
///
/// Every request is attempted exactly once; the first failure is returned.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let response = check_status(response).await?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }
}
