//! Integration test utilities for the chat client
//!
//! Provides fixtures and an in-process mock transport for exercising the
//! composer and reaction flows end to end, plus the env gate for the
//! optional live-server test.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
