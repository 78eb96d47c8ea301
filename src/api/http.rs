use std::time::Duration;

use reqwest::{Client, Response};

use crate::config::HttpConfig;

use super::error::ApiError;

/// Timeout settings derived from the `[http]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl From<&HttpConfig> for TimeoutConfig {
    fn from(http: &HttpConfig) -> Self {
        Self {
            connect: Duration::from_secs(http.connect_timeout_seconds as u64),
            request: Duration::from_secs(http.timeout_seconds as u64),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from(&HttpConfig::default())
    }
}

/// Build the HTTP client shared by every API accessor.
pub fn build_client(timeouts: TimeoutConfig) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(timeouts.connect)
        .timeout(timeouts.request)
        .build()
        .map_err(|e| ApiError::transport("client setup", e))
}

/// Join a base URL and an absolute path without doubling slashes.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turn a non-success response into `ApiError::Status`, reading the body
/// for the message.
pub async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());

    tracing::error!(status = %status, error = %message, "API error");

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Read the whole body and decode it as JSON.
pub async fn read_json<T: serde::de::DeserializeOwned>(
    response: Response,
    endpoint: &str,
) -> Result<T, ApiError> {
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::transport(endpoint, e))?;
    Ok(serde_json::from_slice(&body)?)
}
