//! Entities - the client-side chat domain model

mod member;
mod message;
mod reaction;

pub use member::{Member, Profile};
pub use message::{validate_content, MessageItem, MAX_CONTENT_LEN};
pub use reaction::{Reaction, ReactionCount, ReactionSet, ToggleOutcome};
