//! Team Research use case.
//!
//! Runs the specialist research team over a topic: each specialist gets
//! its own agent session and task prompt, then a synthesis pass merges
//! the findings into one report.
//!
//! Specialists run strictly one after another, and a failed specialist
//! contributes its failure notice as a section body without aborting the
//! remaining steps.

use crate::ports::agent_gateway::AgentGateway;
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::{dispatch, dispatch_with_profile};
use deepdesk_domain::{AgentProfile, PromptTemplate, SpecialistRole, TeamReport, TeamSection};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`TeamResearchUseCase`].
#[derive(Debug, Clone)]
pub struct TeamResearchInput {
    /// The research topic given to every specialist.
    pub topic: String,
}

impl TeamResearchInput {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

/// Use case for running the specialist research team.
pub struct TeamResearchUseCase {
    gateway: Arc<dyn AgentGateway>,
    exchange_logger: Arc<dyn ExchangeLogger>,
}

impl TeamResearchUseCase {
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

    /// Execute the team flow with default (no-op) progress.
    pub async fn execute(&self, input: TeamResearchInput) -> TeamReport {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the team flow with progress callbacks.
    ///
    /// Infallible: every failure is folded into the section or synthesis
    /// body it belongs to.
    pub async fn execute_with_progress(
        &self,
        input: TeamResearchInput,
        progress: &dyn ProgressNotifier,
    ) -> TeamReport {
        info!(topic = %input.topic, "starting team research");
        let model = self.gateway.model().clone();

        let mut sections = Vec::with_capacity(SpecialistRole::ALL.len());
        for role in SpecialistRole::ALL {
            progress.on_step_start(role.name());

            let profile = AgentProfile::specialist(role, model.clone());
            let prompt = role.task_prompt(&input.topic);

            let (body, success) =
                match dispatch_with_profile(self.gateway.as_ref(), &profile, &prompt).await {
                    Ok(text) => (text, true),
                    Err(e) => {
                        warn!(specialist = role.name(), "specialist dispatch failed: {}", e);
                        (format!("Research failed with error: {}", e), false)
                    }
                };

            progress.on_step_complete(role.name(), success);
            sections.push(TeamSection::new(role, body));
        }

        // Synthesis runs on the default research assistant and sees every
        // section body, failure notices included.
        progress.on_step_start("synthesis");
        let pairs: Vec<(String, String)> = sections
            .iter()
            .map(|s| (s.role.display_name().to_string(), s.body.clone()))
            .collect();
        let prompt = PromptTemplate::synthesis_query(&input.topic, &pairs);

        let (synthesis, success) = match dispatch(self.gateway.as_ref(), &prompt).await {
            Ok(text) => (text, true),
            Err(e) => {
                warn!("synthesis dispatch failed: {}", e);
                (format!("Research failed with error: {}", e), false)
            }
        };
        progress.on_step_complete("synthesis", success);

        self.exchange_logger.log(ExchangeEvent::new(
            "team_report",
            serde_json::json!({
                "topic": input.topic,
                "model": model.to_string(),
                "sections": sections
                    .iter()
                    .map(|s| serde_json::json!({ "role": s.role.name(), "text": s.body }))
                    .collect::<Vec<_>>(),
                "synthesis": synthesis,
            }),
        ));

        TeamReport::new(input.topic, model, sections, synthesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::agent_gateway::{AgentSession, GatewayError, StreamHandle};
    use async_trait::async_trait;
    use deepdesk_domain::{Model, SessionId, StreamEvent};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    // ==================== Test Mocks ====================

    struct MockSession {
        id: SessionId,
        events: Mutex<Option<Vec<StreamEvent>>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl MockSession {
        fn new(events: Vec<StreamEvent>, prompts: Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                id: SessionId::new(),
                events: Mutex::new(Some(events)),
                prompts,
            }
        }
    }

    #[async_trait]
    impl AgentSession for MockSession {
        fn id(&self) -> &SessionId {
            &self.id
        }

        async fn stream_query(&self, message: &str) -> Result<StreamHandle, GatewayError> {
            self.prompts.lock().unwrap().push(message.to_string());
            let events = self
                .events
                .lock()
                .unwrap()
                .take()
                .ok_or_else(|| GatewayError::SessionError("stream already consumed".to_string()))?;
            let (tx, rx) = mpsc::channel(events.len().max(1));
            for event in events {
                let _ = tx.send(event).await;
            }
            Ok(StreamHandle::new(rx))
        }
    }

    /// Hands out scripted sessions in call order and records which agent
    /// each session was created for (None for the default assistant).
    struct MockGateway {
        model: Model,
        sessions: Mutex<VecDeque<Box<dyn AgentSession>>>,
        agents: Arc<Mutex<Vec<Option<String>>>>,
    }

    impl MockGateway {
        fn new(sessions: Vec<Box<dyn AgentSession>>, agents: Arc<Mutex<Vec<Option<String>>>>) -> Self {
            Self {
                model: Model::default(),
                sessions: Mutex::new(VecDeque::from(sessions)),
                agents,
            }
        }

        fn next_session(&self) -> Result<Box<dyn AgentSession>, GatewayError> {
            self.sessions
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| GatewayError::ConnectionError("runtime unreachable".to_string()))
        }
    }

    #[async_trait]
    impl AgentGateway for MockGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn create_session(&self) -> Result<Box<dyn AgentSession>, GatewayError> {
            self.agents.lock().unwrap().push(None);
            self.next_session()
        }

        async fn create_session_with_profile(
            &self,
            profile: &AgentProfile,
        ) -> Result<Box<dyn AgentSession>, GatewayError> {
            self.agents.lock().unwrap().push(Some(profile.name.clone()));
            self.next_session()
        }
    }

    fn completed(text: &str) -> Vec<StreamEvent> {
        vec![StreamEvent::Completed(text.to_string())]
    }

    fn team_fixture(
        scripts: Vec<Vec<StreamEvent>>,
    ) -> (
        TeamResearchUseCase,
        Arc<Mutex<Vec<String>>>,
        Arc<Mutex<Vec<Option<String>>>>,
    ) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let agents = Arc::new(Mutex::new(Vec::new()));
        let sessions: Vec<Box<dyn AgentSession>> = scripts
            .into_iter()
            .map(|events| Box::new(MockSession::new(events, prompts.clone())) as Box<dyn AgentSession>)
            .collect();
        let gateway = Arc::new(MockGateway::new(sessions, agents.clone()));
        (TeamResearchUseCase::new(gateway), prompts, agents)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_team_report_sections_in_order() {
        let (use_case, _prompts, _agents) = team_fixture(vec![
            completed("tech findings"),
            completed("biz findings"),
            completed("combined view"),
        ]);

        let report = use_case.execute(TeamResearchInput::new("edge computing")).await;

        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].role, SpecialistRole::Technical);
        assert_eq!(report.sections[0].body, "tech findings");
        assert_eq!(report.sections[1].role, SpecialistRole::Business);
        assert_eq!(report.sections[1].body, "biz findings");
        assert_eq!(report.synthesis, "combined view");
    }

    #[tokio::test]
    async fn test_team_uses_specialist_agents_then_default() {
        let (use_case, _prompts, agents) = team_fixture(vec![
            completed("a"),
            completed("b"),
            completed("c"),
        ]);

        use_case.execute(TeamResearchInput::new("topic")).await;

        let seen = agents.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                Some("technical_researcher".to_string()),
                Some("business_analyst".to_string()),
                None,
            ]
        );
    }

    #[tokio::test]
    async fn test_synthesis_prompt_carries_specialist_findings() {
        let (use_case, prompts, _agents) = team_fixture(vec![
            completed("tech body"),
            completed("biz body"),
            completed("merged"),
        ]);

        use_case.execute(TeamResearchInput::new("quantum computing")).await;

        let sent = prompts.lock().unwrap();
        assert_eq!(sent.len(), 3);
        assert!(sent[0].starts_with("Provide technical analysis of: quantum computing"));
        assert!(sent[1].starts_with("Provide business analysis of: quantum computing"));
        assert!(sent[2].contains("--- Technical Researcher ---"));
        assert!(sent[2].contains("tech body"));
        assert!(sent[2].contains("biz body"));
    }

    #[tokio::test]
    async fn test_specialist_failure_does_not_abort_team() {
        let (use_case, prompts, _agents) = team_fixture(vec![
            vec![StreamEvent::Error("boom".to_string())],
            completed("biz findings"),
            completed("synthesis"),
        ]);

        let report = use_case.execute(TeamResearchInput::new("topic")).await;

        assert_eq!(
            report.sections[0].body,
            "Research failed with error: Request failed: boom"
        );
        assert_eq!(report.sections[1].body, "biz findings");
        assert_eq!(report.synthesis, "synthesis");

        // The synthesis prompt sees the failure notice like any other body
        let sent = prompts.lock().unwrap();
        assert!(sent[2].contains("Research failed with error: Request failed: boom"));
    }

    #[tokio::test]
    async fn test_synthesis_failure_is_in_band() {
        let (use_case, _prompts, _agents) =
            team_fixture(vec![completed("a"), completed("b")]);

        let report = use_case.execute(TeamResearchInput::new("topic")).await;

        assert_eq!(
            report.synthesis,
            "Research failed with error: Connection error: runtime unreachable"
        );
        assert_eq!(report.sections.len(), 2);
    }
}
