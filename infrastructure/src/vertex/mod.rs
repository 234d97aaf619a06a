//! Vertex AI adapter
//!
//! Speaks the Vertex AI Gemini REST protocol. [`VertexAgentGateway`]
//! implements the application's `AgentGateway` port; each
//! [`VertexSession`] posts a single query to `streamGenerateContent`
//! (`alt=sse`) and pumps the response stream into `StreamEvent`s.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use error::VertexError;
pub use gateway::{VertexAgentGateway, VertexGatewayConfig};
pub use session::VertexSession;
