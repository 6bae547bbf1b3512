//! Modal dispatch - fire-and-forget requests to the modal layer
//!
//! The composer's attachment button does not render anything itself; it
//! asks whatever modal layer the application installed to open a dialog,
//! passing along the endpoint + query the dialog will eventually post to.
//! Dispatch is fire-and-forget: no result comes back.

use parking_lot::Mutex;

use crate::transport::ChannelTarget;

/// Kinds of modal the client can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// File-attachment dialog for a message
    MessageFile,
}

/// A request to open a modal, with the context payload the dialog needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalRequest {
    pub kind: ModalKind,
    pub context: ChannelTarget,
}

impl ModalRequest {
    /// Request the file-attachment dialog for a channel target
    pub fn message_file(context: ChannelTarget) -> Self {
        Self {
            kind: ModalKind::MessageFile,
            context,
        }
    }
}

/// Sink for modal requests, installed by the application shell
pub trait ModalDispatcher: Send + Sync {
    /// Open a modal. Fire-and-forget; implementations must not block.
    fn open(&self, request: ModalRequest);
}

/// Dispatcher that drops every request (default when no modal layer exists)
#[derive(Debug, Default)]
pub struct NullModalDispatcher;

impl ModalDispatcher for NullModalDispatcher {
    fn open(&self, _request: ModalRequest) {}
}

/// Dispatcher that records every request, for tests
#[derive(Debug, Default)]
pub struct RecordingModalDispatcher {
    requests: Mutex<Vec<ModalRequest>>,
}

impl RecordingModalDispatcher {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests dispatched so far, in order
    pub fn requests(&self) -> Vec<ModalRequest> {
        self.requests.lock().clone()
    }
}

impl ModalDispatcher for RecordingModalDispatcher {
    fn open(&self, request: ModalRequest) {
        self.requests.lock().push(request);
    }
}
