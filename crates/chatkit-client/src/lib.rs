//! # chatkit-client
//!
//! Client layer for the chat front-end: configuration, telemetry, the HTTP
//! message transport, modal dispatch, and the services a rendering layer
//! drives (composer, reactions). Domain state lives in [`chatkit_core`];
//! this crate wires it to the outside world.

pub mod config;
pub mod dto;
pub mod modal;
pub mod services;
pub mod telemetry;
pub mod transport;

// Re-export commonly used types at crate root
pub use config::{ApiConfig, ClientConfig, ConfigError, Environment};
pub use dto::{ErrorBody, SendMessageRequest};
pub use modal::{
    ModalDispatcher, ModalKind, ModalRequest, NullModalDispatcher, RecordingModalDispatcher,
};
pub use services::{
    ClientContext, ClientError, ClientResult, Composer, ComposerEvent, ComposerService,
    ReactionService,
};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
pub use transport::{ChannelTarget, HttpTransport, MessageTransport, TransportError};
