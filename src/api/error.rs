//! Error types for the remote API clients.
//!
//! Every failure is sorted into one of two buckets: connectivity problems
//! and everything else. View-models only ever show the rendered message.

use thiserror::Error;

/// Coarse classification shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connect, timeout, request send or body read failure.
    Network,
    /// HTTP status, decoding, empty response or missing credentials.
    Other,
}

/// Errors that can occur while calling a remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure from the HTTP client
    #[error("{endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream returned a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response decoded but carried nothing usable
    #[error("No response from {what}")]
    EmptyResponse { what: &'static str },

    /// Upstream answered 404 for a named resource
    #[error("{what} not found: {name}")]
    NotFound { what: &'static str, name: String },

    /// Required key could not be resolved
    #[error("Not configured: {reason}")]
    NotConfigured { reason: String },
}

impl ApiError {
    /// Wrap a transport failure. The request URL is dropped from the
    /// source because query strings can carry API keys.
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::Transport {
            endpoint: endpoint.into(),
            source: source.without_url(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport { source, .. } if is_network_failure(source) => {
                ErrorKind::Network
            }
            _ => ErrorKind::Other,
        }
    }

    /// Render the text surfaced through a view-model's `error` field.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Network => format!("Network error: {}", self),
            ErrorKind::Other => format!("Error: {}", self),
        }
    }
}

fn is_network_failure(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_request() || err.is_body()
}
