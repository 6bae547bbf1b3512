//! Reaction events - the shape of externally delivered reaction changes
//!
//! When another client reacts to a message, some collaborator (a live
//! socket feed, a poll loop) delivers one of these events; the timeline
//! applies it to the targeted [`MessageItem`](crate::entities::MessageItem)
//! on the same single-threaded queue that handles local toggles. This crate
//! defines only the event shape and its deterministic application; how
//! events travel is left to that collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// A reaction change delivered from outside the component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionEvent {
    /// A member added a reaction
    ReactionAdded {
        message_id: Snowflake,
        member_id: Snowflake,
        emoji: String,
        timestamp: DateTime<Utc>,
    },

    /// A member removed their reaction
    ReactionRemoved {
        message_id: Snowflake,
        member_id: Snowflake,
        emoji: String,
        timestamp: DateTime<Utc>,
    },

    /// All reactions on a message were removed by a moderator
    ReactionsCleared {
        message_id: Snowflake,
        timestamp: DateTime<Utc>,
    },
}

impl ReactionEvent {
    /// Create a ReactionAdded event stamped with the current time
    pub fn reaction_added(
        message_id: Snowflake,
        member_id: Snowflake,
        emoji: impl Into<String>,
    ) -> Self {
        Self::ReactionAdded {
            message_id,
            member_id,
            emoji: emoji.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a ReactionRemoved event stamped with the current time
    pub fn reaction_removed(
        message_id: Snowflake,
        member_id: Snowflake,
        emoji: impl Into<String>,
    ) -> Self {
        Self::ReactionRemoved {
            message_id,
            member_id,
            emoji: emoji.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a ReactionsCleared event stamped with the current time
    pub fn reactions_cleared(message_id: Snowflake) -> Self {
        Self::ReactionsCleared {
            message_id,
            timestamp: Utc::now(),
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ReactionAdded { .. } => "REACTION_ADDED",
            Self::ReactionRemoved { .. } => "REACTION_REMOVED",
            Self::ReactionsCleared { .. } => "REACTIONS_CLEARED",
        }
    }

    /// The message this event targets
    pub fn message_id(&self) -> Snowflake {
        match self {
            Self::ReactionAdded { message_id, .. }
            | Self::ReactionRemoved { message_id, .. }
            | Self::ReactionsCleared { message_id, .. } => *message_id,
        }
    }

    /// When the change happened
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ReactionAdded { timestamp, .. }
            | Self::ReactionRemoved { timestamp, .. }
            | Self::ReactionsCleared { timestamp, .. } => *timestamp,
        }
    }
}
