//! Research Topic use case.
//!
//! Dispatches a single research request to the agent runtime and wraps
//! the streamed response in a [`ResearchReport`].
//!
//! Failures never surface as errors: a gateway or stream failure is
//! folded into the report body as a failure notice, matching how results
//! are presented to the user.

use crate::ports::agent_gateway::AgentGateway;
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::dispatch;
use deepdesk_domain::{PromptTemplate, ResearchDepth, ResearchReport};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`ResearchTopicUseCase`].
#[derive(Debug, Clone)]
pub struct ResearchTopicInput {
    /// The research topic, interpolated verbatim into the prompt.
    pub topic: String,
    /// How thorough the research pass should be.
    pub depth: ResearchDepth,
}

impl ResearchTopicInput {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            depth: ResearchDepth::default(),
        }
    }

    pub fn with_depth(mut self, depth: ResearchDepth) -> Self {
        self.depth = depth;
        self
    }
}

/// Use case for researching a topic through the agent runtime.
pub struct ResearchTopicUseCase {
    gateway: Arc<dyn AgentGateway>,
    exchange_logger: Arc<dyn ExchangeLogger>,
}

impl ResearchTopicUseCase {
    pub fn new(gateway: Arc<dyn AgentGateway>) -> Self {
        Self {
            gateway,
            exchange_logger: Arc::new(NoExchangeLogger),
        }
    }

    /// Attach an exchange logger.
    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.exchange_logger = logger;
        self
    }

    /// Execute the research dispatch with default (no-op) progress.
    pub async fn execute(&self, input: ResearchTopicInput) -> ResearchReport {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the research dispatch with progress callbacks.
    ///
    /// Infallible: a failed dispatch produces a report whose body is the
    /// failure notice.
    pub async fn execute_with_progress(
        &self,
        input: ResearchTopicInput,
        progress: &dyn ProgressNotifier,
    ) -> ResearchReport {
        info!(topic = %input.topic, depth = %input.depth, "starting research");
        progress.on_step_start("research");

        let prompt = PromptTemplate::research_query(&input.topic, input.depth);

        let (body, success) = match dispatch(self.gateway.as_ref(), &prompt).await {
            Ok(text) => (text, true),
            Err(e) => {
                warn!(topic = %input.topic, "research dispatch failed: {}", e);
                (format!("Research failed with error: {}", e), false)
            }
        };

        progress.on_step_complete("research", success);

        let model = self.gateway.model().clone();
        self.exchange_logger.log(ExchangeEvent::new(
            "research_report",
            serde_json::json!({
                "topic": input.topic,
                "depth": input.depth.as_str(),
                "model": model.to_string(),
                "bytes": body.len(),
                "text": body,
            }),
        ));

        ResearchReport::new(input.topic, input.depth, model, body)
    }
}
