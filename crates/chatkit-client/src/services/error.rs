//! Service layer error types
//!
//! Provides a unified error type for all client operations. Send failures
//! are returned to the caller rather than swallowed, so the UI can show the
//! failure and offer a retry where [`ClientError::is_retryable`] says one
//! can help.

use chatkit_core::DomainError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::transport::TransportError;

/// Client layer error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request DTO failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// The transport could not deliver the request
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Configuration problem
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl ClientError {
    /// Whether retrying the failed operation can plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            Self::Domain(_) | Self::Validation(_) | Self::Config(_) => false,
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
