//! Response DTOs from the message API
//!
//! The send flow depends on nothing of a successful response beyond its
//! status; only the error body shape is modeled.

use serde::Deserialize;

/// Error body returned by the API: `{ "code": "...", "message": "..." }`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
