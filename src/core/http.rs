//! HTTP client utilities.
//!
//! Shared reqwest plumbing for the insult fetchers.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};

use crate::error::{BarbError, Result};

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("barb/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| BarbError::Network(e.to_string()))
}

/// Issue a GET and reject non-2xx statuses.
async fn get_checked(client: &Client, url: &str, timeout: Duration) -> Result<Response> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            BarbError::Timeout(timeout.as_secs())
        } else {
            BarbError::Network(e.to_string())
        }
    })?;

    if !response.status().is_success() {
        return Err(BarbError::Network(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    Ok(response)
}

/// Fetch a decoded text body from a URL.
///
/// # Errors
///
/// Returns error on network failure, timeout, or non-2xx status.
pub async fn get_text(client: &Client, url: &str, timeout: Duration) -> Result<String> {
    get_checked(client, url, timeout)
        .await?
        .text()
        .await
        .map_err(|e| BarbError::Network(e.to_string()))
}

/// Fetch JSON from a URL.
///
/// # Errors
///
/// Returns error on network failure, timeout, non-2xx status, or a body that
/// does not decode into `T`.
pub async fn get_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<T> {
    get_checked(client, url, timeout)
        .await?
        .json()
        .await
        .map_err(|e| BarbError::ParseResponse(e.to_string()))
}
