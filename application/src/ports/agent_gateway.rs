//! Agent gateway port
//!
//! Defines the interface for communicating with the external agent runtime.

use async_trait::async_trait;
use deepdesk_domain::{AgentProfile, Model, SessionId, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during agent gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the external agent runtime
///
/// This port defines how the application layer reaches the runtime that
/// hosts the research agents. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// The model backing agents created through this gateway
    fn model(&self) -> &Model;

    /// Create an ephemeral session with the default research assistant agent
    async fn create_session(&self) -> Result<Box<dyn AgentSession>, GatewayError>;

    /// Create an ephemeral session with a custom agent profile
    async fn create_session_with_profile(
        &self,
        profile: &AgentProfile,
    ) -> Result<Box<dyn AgentSession>, GatewayError>;
}

/// An active agent session
///
/// Sessions are single-use: one `stream_query` per session is the intended
/// lifecycle, and nothing is retained once the handle is consumed.
#[async_trait]
pub trait AgentSession: Send + Sync {
    /// Identity of this session, for log correlation
    fn id(&self) -> &SessionId;

    /// Send a query and receive the streamed response
    async fn stream_query(&self, message: &str) -> Result<StreamHandle, GatewayError>;
}

/// Handle for receiving streaming events from an agent session.
///
/// Wraps an `mpsc::Receiver<StreamEvent>` and provides convenience methods
/// for consuming the stream.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect all text into a single string.
    ///
    /// Fragments are concatenated in arrival order. A `Completed` event
    /// ends the stream; its payload is only used when no fragments were
    /// seen, so transports may send either form. A closed channel without
    /// a terminal event yields whatever was accumulated.
    pub async fn collect_text(mut self) -> Result<String, GatewayError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Fragment(chunk) => full_text.push_str(&chunk),
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::RequestFailed(e));
                }
            }
        }
        // Channel closed without a terminal event: return what we have
        Ok(full_text)
    }
}
