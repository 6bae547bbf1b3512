//! Message transport - posting new messages to the server
//!
//! The composer does not care how messages travel; it talks to the
//! [`MessageTransport`] trait with a caller-supplied endpoint + query pair
//! and only observes success or failure. [`HttpTransport`] is the production
//! implementation; tests substitute a recording mock.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::dto::SendMessageRequest;

pub use http::HttpTransport;

/// Destination for message posts: an endpoint path plus its query string.
///
/// The rendering layer hands this pair down unchanged (a channel view and a
/// direct-message view post to the same path shape with different query
/// parameters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTarget {
    /// Endpoint path, e.g. `/api/messages`
    pub api_url: String,
    /// Query parameters appended to the path
    pub query: Vec<(String, String)>,
}

impl ChannelTarget {
    /// Create a target with no query parameters
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Transport errors surfaced to the send flow
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status {
        status: u16,
        /// Machine-readable error code from the response body, when present
        code: Option<String>,
        message: String,
    },

    /// The request never completed (connection, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TransportError {
    /// Whether retrying the same request can plausibly succeed.
    ///
    /// Network faults and server-side failures are retryable; client errors
    /// (validation, permissions) are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
        }
    }
}

/// Outbound message channel to the server
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Post a new message to the given target.
    ///
    /// Implementations report success or a [`TransportError`]; the caller
    /// depends on nothing else of the response.
    async fn post_message(
        &self,
        target: &ChannelTarget,
        request: &SendMessageRequest,
    ) -> Result<(), TransportError>;
}
