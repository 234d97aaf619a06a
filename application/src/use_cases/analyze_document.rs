//! Analyze Document use case.
//!
//! Dispatches a document analysis request to the agent runtime and wraps
//! the streamed response in an [`AnalysisReport`].
//!
//! Content is clipped to [`ANALYSIS_CONTENT_LIMIT`] characters before the
//! prompt is built; the report records the original character count so
//! callers can tell a clip happened.
//!
//! [`ANALYSIS_CONTENT_LIMIT`]: deepdesk_domain::ANALYSIS_CONTENT_LIMIT

use crate::ports::agent_gateway::AgentGateway;
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::dispatch;
use deepdesk_domain::{AnalysisFocus, AnalysisReport, PromptTemplate};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`AnalyzeDocumentUseCase`].
#[derive(Debug, Clone)]
pub struct AnalyzeDocumentInput {
    /// The document content to analyze.
    pub content: String,
    /// The lens to apply.
    pub focus: AnalysisFocus,
}

impl AnalyzeDocumentInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            focus: AnalysisFocus::default(),
        }
    }

    pub fn with_focus(mut self, focus: AnalysisFocus) -> Self {
        self.focus = focus;
        self
    }
}

/// Use case for analyzing document content through the agent runtime.
pub struct AnalyzeDocumentUseCase {
    gateway: Arc<dyn AgentGateway>,
    exchange_logger: Arc<dyn ExchangeLogger>,
}

impl AnalyzeDocumentUseCase {
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

    /// Execute the analysis dispatch with default (no-op) progress.
    pub async fn execute(&self, input: AnalyzeDocumentInput) -> AnalysisReport {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the analysis dispatch with progress callbacks.
    ///
    /// Infallible: a failed dispatch produces a report whose body is the
    /// failure notice.
    pub async fn execute_with_progress(
        &self,
        input: AnalyzeDocumentInput,
        progress: &dyn ProgressNotifier,
    ) -> AnalysisReport {
        let content_chars = input.content.chars().count();
        info!(focus = %input.focus, content_chars, "starting analysis");
        progress.on_step_start("analysis");

        let prompt = PromptTemplate::analysis_query(&input.content, input.focus);

        let (body, success) = match dispatch(self.gateway.as_ref(), &prompt).await {
            Ok(text) => (text, true),
            Err(e) => {
                warn!("analysis dispatch failed: {}", e);
                (format!("Analysis failed with error: {}", e), false)
            }
        };

        progress.on_step_complete("analysis", success);

        let model = self.gateway.model().clone();
        self.exchange_logger.log(ExchangeEvent::new(
            "analysis_report",
            serde_json::json!({
                "focus": input.focus.as_str(),
                "content_chars": content_chars,
                "model": model.to_string(),
                "bytes": body.len(),
                "text": body,
            }),
        ));

        AnalysisReport::new(input.focus, content_chars, model, body)
    }
}
