//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use chatkit_core::{Member, MessageItem, Profile, Snowflake};

/// Counter for unique test IDs (zero is the invalid-member sentinel)
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique id for test data
pub fn unique_id() -> Snowflake {
    Snowflake::new(COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// A member with a unique id and a generated profile name
pub fn member(name: &str) -> Member {
    Member::new(unique_id(), Profile::new(name))
}

/// A member with an avatar image
pub fn member_with_avatar(name: &str) -> Member {
    let id = unique_id();
    Member::new(
        id,
        Profile::with_image(name, format!("https://cdn.example.com/avatars/{id}.png")),
    )
}

/// A plain message item authored by the given member
pub fn message(author: Member, content: &str) -> MessageItem {
    MessageItem::new(
        unique_id(),
        unique_id(),
        author,
        content.to_string(),
        Utc::now(),
    )
}
