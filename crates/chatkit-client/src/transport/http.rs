//! HTTP implementation of the message transport

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::dto::{ErrorBody, SendMessageRequest};

use super::{ChannelTarget, MessageTransport, TransportError};

/// Message transport over HTTP (reqwest)
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with the default client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a transport from client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api.base_url.clone(),
        })
    }

    /// Join the configured base URL with a target path
    fn url_for(&self, target: &ChannelTarget) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = target.api_url.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl MessageTransport for HttpTransport {
    async fn post_message(
        &self,
        target: &ChannelTarget,
        request: &SendMessageRequest,
    ) -> Result<(), TransportError> {
        let url = self.url_for(target);
        debug!(url = %url, "Posting message");

        let response = self
            .http
            .post(&url)
            .query(&target.query)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Prefer the server's error body; fall back to the status reason
        let body = response.json::<ErrorBody>().await.ok();
        let message = body.as_ref().map_or_else(
            || {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            },
            |b| b.message.clone(),
        );
        warn!(url = %url, status = status.as_u16(), "Message post rejected");

        Err(TransportError::Status {
            status: status.as_u16(),
            code: body.map(|b| b.code),
            message,
        })
    }
}
