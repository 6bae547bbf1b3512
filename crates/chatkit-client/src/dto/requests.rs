//! Request DTOs posted to the message API
//!
//! Request DTOs implement `Serialize` for the wire and `Validate` so input
//! is checked before a request is attempted.

use serde::Serialize;
use validator::Validate;

/// Body of a message post: `{ "content": "..." }`
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub content: String,
}

impl SendMessageRequest {
    /// Create a new SendMessageRequest
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
