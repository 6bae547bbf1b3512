//! Test helpers - mock collaborators and the live-server gate

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use chatkit_client::{
    ChannelTarget, ClientContext, MessageTransport, ModalDispatcher, SendMessageRequest,
    TransportError,
};
use chatkit_core::Member;

/// Recording transport with a scriptable failure for the next request
#[derive(Default)]
pub struct MockTransport {
    posts: Mutex<Vec<(ChannelTarget, String)>>,
    fail_next: Mutex<Option<(u16, String)>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make the next post fail with the given status
    pub fn fail_next(&self, status: u16, message: &str) {
        *self.fail_next.lock() = Some((status, message.to_string()));
    }

    /// Posts accepted so far: (target, content) in order
    pub fn posts(&self) -> Vec<(ChannelTarget, String)> {
        self.posts.lock().clone()
    }

    /// Contents of all accepted posts
    pub fn sent_contents(&self) -> Vec<String> {
        self.posts.lock().iter().map(|(_, c)| c.clone()).collect()
    }
}

#[async_trait]
impl MessageTransport for MockTransport {
    async fn post_message(
        &self,
        target: &ChannelTarget,
        request: &SendMessageRequest,
    ) -> Result<(), TransportError> {
        if let Some((status, message)) = self.fail_next.lock().take() {
            return Err(TransportError::Status {
                status,
                code: None,
                message,
            });
        }
        self.posts
            .lock()
            .push((target.clone(), request.content.clone()));
        Ok(())
    }
}

/// Build a client context around the given collaborators
pub fn test_context(
    transport: Arc<dyn MessageTransport>,
    modal: Arc<dyn ModalDispatcher>,
    current_member: Member,
) -> ClientContext {
    ClientContext::new(transport, modal, current_member)
}

/// URL of a live server to test against, if one is configured.
///
/// Reads `CHATKIT_TEST_API_URL` (after loading `.env` when present); tests
/// depending on a live server return early when it is unset.
pub fn live_api_url() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var("CHATKIT_TEST_API_URL").ok()
}
