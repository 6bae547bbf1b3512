//! Domain errors - validation rules this layer owns
//!
//! The reaction aggregator itself has no failure path; these errors cover
//! the input rules callers enforce before driving it, plus the message
//! content rules checked before a send is attempted.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Message content cannot be empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Reaction emoji cannot be empty")]
    EmptyEmoji,

    #[error("Acting member id cannot be zero")]
    ZeroMemberId,
}

impl DomainError {
    /// Get an error code string for logs and UI error mapping
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::EmptyEmoji => "EMPTY_EMOJI",
            Self::ZeroMemberId => "ZERO_MEMBER_ID",
        }
    }

    /// Check if this is a validation error (currently all variants are)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyContent | Self::ContentTooLong { .. } | Self::EmptyEmoji | Self::ZeroMemberId
        )
    }
}
