//! Client context - dependency container for services
//!
//! Holds the transport, the modal dispatcher, and the authenticated member
//! acting in this session. Cheap to clone; collaborators are `Arc`-shared.

use std::sync::Arc;

use chatkit_core::Member;

use crate::modal::ModalDispatcher;
use crate::transport::MessageTransport;

/// Client context containing all service dependencies
#[derive(Clone)]
pub struct ClientContext {
    transport: Arc<dyn MessageTransport>,
    modal: Arc<dyn ModalDispatcher>,
    current_member: Member,
}

impl ClientContext {
    /// Create a new client context
    pub fn new(
        transport: Arc<dyn MessageTransport>,
        modal: Arc<dyn ModalDispatcher>,
        current_member: Member,
    ) -> Self {
        Self {
            transport,
            modal,
            current_member,
        }
    }

    /// Outbound message transport
    pub fn transport(&self) -> &dyn MessageTransport {
        self.transport.as_ref()
    }

    /// Modal layer sink
    pub fn modal(&self) -> &dyn ModalDispatcher {
        self.modal.as_ref()
    }

    /// The authenticated member acting in this session.
    ///
    /// Reaction toggles are keyed by this member's id.
    pub fn current_member(&self) -> &Member {
        &self.current_member
    }
}
