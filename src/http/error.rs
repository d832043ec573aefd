//! Classification of failed API responses.

use anyhow::Result;
use log::debug;
use reqwest::{Response, StatusCode};

/// A request that reached the remote API but was answered with an error status.
#[derive(Debug, PartialEq, Eq)]
pub enum RemoteRequestError {
    /// Rate limit exceeded (HTTP 429, or 403 with a rate limit message)
    RateLimitExceeded(String),
    /// Resource not found (HTTP 404), usually an unknown owner or repository
    NotFound(String),
    /// Forbidden access (HTTP 403 non-rate-limit)
    Forbidden(String),
    /// Any other 4xx status
    ClientError(u16, String),
    /// Any 5xx status
    ServerError(u16, String),
}

impl std::fmt::Display for RemoteRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteRequestError::RateLimitExceeded(url) => {
                write!(
                    f,
                    "API rate limit exceeded while requesting {}. Try again later.",
                    url
                )
            }
            RemoteRequestError::NotFound(url) => {
                write!(f, "Not found: {}. Check the repository owner and name.", url)
            }
            RemoteRequestError::Forbidden(url) => {
                write!(f, "Access forbidden: {}", url)
            }
            RemoteRequestError::ClientError(status, url) => {
                write!(f, "Request error: HTTP {} for {}", status, url)
            }
            RemoteRequestError::ServerError(status, url) => {
                write!(f, "Server error: HTTP {} for {}", status, url)
            }
        }
    }
}

impl std::error::Error for RemoteRequestError {}

/// Maps a non-success status (and its body) to a [`RemoteRequestError`].
pub fn classify_status(status: StatusCode, body: &str, url: &str) -> RemoteRequestError {
    let url = url.to_string();
    match status {
        StatusCode::NOT_FOUND => RemoteRequestError::NotFound(url),
        StatusCode::TOO_MANY_REQUESTS => RemoteRequestError::RateLimitExceeded(url),
        StatusCode::FORBIDDEN => {
            if body.to_lowercase().contains("rate limit") {
                RemoteRequestError::RateLimitExceeded(url)
            } else {
                RemoteRequestError::Forbidden(url)
            }
        }
        s if s.is_server_error() => RemoteRequestError::ServerError(s.as_u16(), url),
        s => RemoteRequestError::ClientError(s.as_u16(), url),
    }
}

/// Passes successful responses through, turns everything else into a
/// [`RemoteRequestError`].
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    debug!("{} returned {}: {}", url, status, body);

    Err(classify_status(status, &body, &url).into())
}
