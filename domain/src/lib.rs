//! Domain layer for deepdesk
//!
//! This crate contains the core business logic, entities, and value objects
//! of the research assistant. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Research and Analysis
//!
//! deepdesk performs desk research through an external agent runtime:
//!
//! - **Research**: a topic is expanded into a structured research prompt and
//!   dispatched to the agent, which answers with a sectioned report
//! - **Analysis**: a block of document content is clipped and dispatched for
//!   a focused reading (comprehensive, technical, or business)
//!
//! ## Sessions and Streams
//!
//! Every dispatch runs inside an ephemeral [`SessionId`]-scoped exchange and
//! produces a finite sequence of [`StreamEvent`]s that is consumed exactly
//! once by concatenation. Nothing survives past a single call.

pub mod agent;
pub mod core;
pub mod prompt;
pub mod research;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use agent::profile::AgentProfile;
pub use core::{error::DomainError, model::Model};
pub use prompt::{
    specialist::SpecialistRole,
    template::{ANALYSIS_CONTENT_LIMIT, PromptTemplate},
};
pub use research::{
    depth::ResearchDepth,
    focus::AnalysisFocus,
    report::{AnalysisReport, ResearchReport, TeamReport, TeamSection},
};
pub use session::{entities::SessionId, stream::StreamEvent};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    value_objects::{ToolError, ToolResult},
};
