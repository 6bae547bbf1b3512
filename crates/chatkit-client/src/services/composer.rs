//! Message composer - draft state and the send flow
//!
//! [`Composer`] is the owned state behind the message input: the draft text
//! and whether a send is in flight. The rendering layer translates raw UI
//! input into [`ComposerEvent`]s and feeds them to [`Composer::apply`];
//! [`ComposerService`] performs the send against the transport.

use tracing::{debug, info, instrument, warn};
use validator::Validate;

use chatkit_core::validate_content;

use crate::dto::SendMessageRequest;
use crate::modal::ModalRequest;
use crate::transport::ChannelTarget;

use super::context::ClientContext;
use super::error::ClientResult;

/// Input events the composer understands.
///
/// Key handling maps Enter to `Submit` and Shift+Enter to `Newline`; the
/// emoji picker feeds `InsertEmoji`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    /// Replace the draft with the current input value
    Input(String),
    /// Append an emoji from the picker to the draft
    InsertEmoji(String),
    /// Insert a line break at the end of the draft
    Newline,
    /// Request submission of the current draft
    Submit,
}

impl ComposerEvent {
    /// Map an Enter keypress to its composer event
    pub fn from_enter_key(shift: bool) -> Self {
        if shift {
            Self::Newline
        } else {
            Self::Submit
        }
    }
}

/// Owned composer state for one message input
#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: String,
    sending: bool,
}

impl Composer {
    /// Create an empty composer
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text
    #[inline]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether a send is in flight (input is disabled meanwhile)
    #[inline]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Apply an input event.
    ///
    /// Returns the draft content when the event is a `Submit` that should
    /// go out: submission of a blank draft is a silent no-op, and so is any
    /// event that would edit the draft while a send is in flight.
    pub fn apply(&mut self, event: ComposerEvent) -> Option<String> {
        match event {
            ComposerEvent::Input(value) => {
                if !self.sending {
                    self.draft = value;
                }
                None
            }
            ComposerEvent::InsertEmoji(emoji) => {
                if !self.sending {
                    if !self.draft.is_empty() {
                        self.draft.push(' ');
                    }
                    self.draft.push_str(&emoji);
                }
                None
            }
            ComposerEvent::Newline => {
                if !self.sending {
                    self.draft.push('\n');
                }
                None
            }
            ComposerEvent::Submit => {
                if self.sending || self.draft.trim().is_empty() {
                    None
                } else {
                    Some(self.draft.clone())
                }
            }
        }
    }

    /// Clear the draft after a successful send
    pub fn reset(&mut self) {
        self.draft.clear();
        self.sending = false;
    }

    pub(crate) fn set_sending(&mut self, sending: bool) {
        self.sending = sending;
    }
}

/// Composer service - validates and sends the drafted message
pub struct ComposerService<'a> {
    ctx: &'a ClientContext,
}

impl<'a> ComposerService<'a> {
    /// Create a new ComposerService
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    /// Submit the composer's draft to the given target.
    ///
    /// Returns `Ok(true)` when a message went out (the draft is cleared),
    /// `Ok(false)` when there was nothing to send. On failure the error is
    /// returned to the caller and the draft is retained so the user can
    /// retry.
    #[instrument(skip(self, composer))]
    pub async fn submit(
        &self,
        composer: &mut Composer,
        target: &ChannelTarget,
    ) -> ClientResult<bool> {
        let Some(content) = composer.apply(ComposerEvent::Submit) else {
            return Ok(false);
        };

        validate_content(&content)?;
        let request = SendMessageRequest::new(content);
        request.validate()?;

        composer.set_sending(true);
        let result = self.ctx.transport().post_message(target, &request).await;
        composer.set_sending(false);

        match result {
            Ok(()) => {
                composer.reset();
                info!(api_url = %target.api_url, "Message sent");
                Ok(true)
            }
            Err(e) => {
                warn!(api_url = %target.api_url, error = %e, "Message send failed");
                Err(e.into())
            }
        }
    }

    /// Open the file-attachment dialog for the given target.
    ///
    /// Fire-and-forget: the modal layer takes it from here.
    pub fn open_attachment_modal(&self, target: &ChannelTarget) {
        debug!(api_url = %target.api_url, "Opening attachment modal");
        self.ctx
            .modal()
            .open(ModalRequest::message_file(target.clone()));
    }
}
