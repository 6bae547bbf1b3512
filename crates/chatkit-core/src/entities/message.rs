//! Message item - the per-message render model
//!
//! A [`MessageItem`] is the client-side view of one message in a channel:
//! the author, the text, display flags, and the reactions attached to it.
//! It is an owned value created when the message scrolls into the timeline
//! and dropped when it leaves; nothing here persists or talks to the server.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{Member, ReactionCount, ReactionSet, ToggleOutcome};
use crate::error::DomainError;
use crate::events::ReactionEvent;
use crate::value_objects::Snowflake;

/// Maximum message content length accepted by the server
pub const MAX_CONTENT_LEN: usize = 2000;

/// Validate message content against the server's rules.
///
/// Blank content (empty or whitespace-only) and content over
/// [`MAX_CONTENT_LEN`] characters are rejected before a send is attempted.
pub fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::EmptyContent);
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(DomainError::ContentTooLong {
            max: MAX_CONTENT_LEN,
        });
    }
    Ok(())
}

/// One message as rendered in the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageItem {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub author: Member,
    pub content: String,
    /// Attachment URL, if the message carries a file
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub edited: bool,
    pub deleted: bool,
    /// Reactions attached to this message; starts empty when the item is
    /// created and lives exactly as long as the item
    pub reactions: ReactionSet,
}

impl MessageItem {
    /// Create a new MessageItem with no reactions
    pub fn new(
        id: Snowflake,
        channel_id: Snowflake,
        author: Member,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            channel_id,
            author,
            content,
            file_url: None,
            created_at,
            edited: false,
            deleted: false,
            reactions: ReactionSet::new(),
        }
    }

    /// Content split on newlines for line-preserving display
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    /// Whether the "(edited)" marker is shown.
    ///
    /// Deleted messages hide the marker even if they were edited before
    /// deletion.
    #[inline]
    pub fn shows_edited_marker(&self) -> bool {
        self.edited && !self.deleted
    }

    /// Check if the message carries a file attachment
    #[inline]
    pub fn has_attachment(&self) -> bool {
        self.file_url.is_some()
    }

    /// Toggle a member's reaction on this message.
    ///
    /// Clicking a reaction pill and picking the same emoji from the picker
    /// both land here; the pill that displays a reaction is also its toggle
    /// target.
    pub fn toggle_reaction(&mut self, emoji: &str, member_id: Snowflake) -> ToggleOutcome {
        self.reactions.toggle(emoji, member_id)
    }

    /// Apply an externally delivered reaction event.
    ///
    /// Events addressed to a different message are ignored. Returns whether
    /// the reaction state changed.
    pub fn apply(&mut self, event: &ReactionEvent) -> bool {
        if event.message_id() != self.id {
            return false;
        }
        match event {
            ReactionEvent::ReactionAdded {
                member_id, emoji, ..
            } => self.reactions.insert(emoji, *member_id),
            ReactionEvent::ReactionRemoved {
                member_id, emoji, ..
            } => self.reactions.remove(emoji, *member_id),
            ReactionEvent::ReactionsCleared { .. } => {
                let changed = !self.reactions.is_empty();
                self.reactions.clear();
                changed
            }
        }
    }

    /// Render-ready reaction pills for this message, from the viewer's
    /// perspective
    pub fn reaction_pills(&self, viewer: Snowflake) -> Vec<ReactionCount> {
        self.reactions.counts(viewer)
    }
}
