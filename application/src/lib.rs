//! Application layer for deepdesk
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    agent_gateway::{AgentGateway, AgentSession, GatewayError, StreamHandle},
    exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::analyze_document::{AnalyzeDocumentInput, AnalyzeDocumentUseCase};
pub use use_cases::research_topic::{ResearchTopicInput, ResearchTopicUseCase};
pub use use_cases::team_research::{TeamResearchInput, TeamResearchUseCase};
