//! Reaction service
//!
//! Glue between UI reaction events and the aggregation on a message item:
//! resolves the acting member from the context, enforces the aggregator's
//! input preconditions, and applies externally delivered reaction events.

use tracing::{debug, info, instrument};

use chatkit_core::{DomainError, MessageItem, ReactionEvent, ToggleOutcome};

use super::context::ClientContext;
use super::error::ClientResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ClientContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    /// Toggle the current member's reaction on a message.
    ///
    /// Both input channels land here: the emoji picker on the message and a
    /// click on an existing reaction pill. The outcome says which side of
    /// the add/remove pair the toggle produced; broadcasting it is a future
    /// collaborator's job.
    #[instrument(skip(self, item), fields(message_id = %item.id))]
    pub fn toggle(&self, item: &mut MessageItem, emoji: &str) -> ClientResult<ToggleOutcome> {
        if emoji.is_empty() {
            return Err(DomainError::EmptyEmoji.into());
        }
        let member_id = self.ctx.current_member().id;
        if member_id.is_zero() {
            return Err(DomainError::ZeroMemberId.into());
        }

        let outcome = item.toggle_reaction(emoji, member_id);
        info!(
            emoji = %emoji,
            member_id = %member_id,
            added = outcome.is_added(),
            "Reaction toggled"
        );
        Ok(outcome)
    }

    /// Apply an externally delivered reaction event to a message item.
    ///
    /// Deliveries must come in on the same event queue as local toggles;
    /// application itself is synchronous and idempotent. Returns whether the
    /// item changed.
    pub fn apply_event(&self, item: &mut MessageItem, event: &ReactionEvent) -> bool {
        let changed = item.apply(event);
        if changed {
            debug!(
                message_id = %item.id,
                event_type = event.event_type(),
                "Remote reaction applied"
            );
        }
        changed
    }
}
