//! Infrastructure layer for deepdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod tools;
pub mod vertex;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAgentConfig, FileAnalysisConfig, FileConfig, FileLoggingConfig,
    FileReplConfig, FileResearchConfig, FileRuntimeConfig,
};
pub use logging::JsonlExchangeLogger;
pub use tools::{ToolRegistry, research_tool_spec};
pub use vertex::{
    error::{Result, VertexError},
    gateway::{VertexAgentGateway, VertexGatewayConfig},
    session::VertexSession,
};
