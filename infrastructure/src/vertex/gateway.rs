//! Vertex AI agent gateway implementation

use crate::vertex::error::{Result, VertexError};
use crate::vertex::protocol::{ToolDecl, tool_declarations};
use crate::vertex::session::VertexSession;
use async_trait::async_trait;
use deepdesk_application::ports::agent_gateway::{AgentGateway, AgentSession, GatewayError};
use deepdesk_domain::tool::entities::ToolSpec;
use deepdesk_domain::{AgentProfile, Model};
use tracing::{debug, info};

/// Connection settings for the Vertex AI runtime.
///
/// Nothing is validated here: an unset project or location produces a
/// malformed endpoint, and the resulting request failure is reported
/// in-band like any other dispatch failure.
#[derive(Debug, Clone, Default)]
pub struct VertexGatewayConfig {
    /// Cloud project that hosts the agent runtime
    pub project: Option<String>,
    /// Runtime region (e.g. "us-central1")
    pub location: Option<String>,
    /// Full base URL override. When unset the endpoint host is derived
    /// from `location`.
    pub api_endpoint: Option<String>,
    /// Static bearer token. When unset each session asks `gcloud` for one.
    pub access_token: Option<String>,
}

impl From<&crate::config::FileRuntimeConfig> for VertexGatewayConfig {
    fn from(config: &crate::config::FileRuntimeConfig) -> Self {
        Self {
            project: config.project.clone(),
            location: config.location.clone(),
            api_endpoint: config.api_endpoint.clone(),
            access_token: config.access_token.clone(),
        }
    }
}

/// Agent gateway backed by the Vertex AI Gemini REST API.
///
/// Holds the default research assistant profile and the tool
/// specification declared on its sessions. Sessions created for custom
/// profiles (the specialist team) carry no tool declarations.
pub struct VertexAgentGateway {
    client: reqwest::Client,
    config: VertexGatewayConfig,
    profile: AgentProfile,
    tools: ToolSpec,
}

impl VertexAgentGateway {
    /// Create a gateway with an explicit profile and tool specification
    pub fn new(config: VertexGatewayConfig, profile: AgentProfile, tools: ToolSpec) -> Self {
        info!(agent = %profile.name, model = %profile.model, "VertexAgentGateway initialized");

        Self {
            client: reqwest::Client::new(),
            config,
            profile,
            tools,
        }
    }

    /// Create a gateway with the default research assistant profile and
    /// the built-in research tools
    pub fn research_assistant(config: VertexGatewayConfig, model: Model) -> Self {
        Self::new(
            config,
            AgentProfile::research_assistant(model),
            crate::tools::research_tool_spec(),
        )
    }

    /// Build the streaming endpoint URL for a model
    fn endpoint(&self, model: &Model) -> String {
        let project = self.config.project.as_deref().unwrap_or_default();
        let location = self.config.location.as_deref().unwrap_or_default();
        let base = match &self.config.api_endpoint {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{location}-aiplatform.googleapis.com"),
        };
        format!(
            "{base}/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:streamGenerateContent?alt=sse"
        )
    }

    async fn resolve_access_token(&self) -> Result<String> {
        if let Some(token) = &self.config.access_token {
            return Ok(token.clone());
        }
        fetch_gcloud_token().await
    }

    async fn open_session(
        &self,
        profile: &AgentProfile,
        tools: Vec<ToolDecl>,
    ) -> std::result::Result<Box<dyn AgentSession>, GatewayError> {
        let token = self
            .resolve_access_token()
            .await
            .map_err(|e| GatewayError::SessionError(e.to_string()))?;

        let session = VertexSession::new(
            self.client.clone(),
            self.endpoint(&profile.model),
            token,
            profile,
            tools,
        );

        Ok(Box::new(session))
    }
}

/// Ask the gcloud CLI for an access token
async fn fetch_gcloud_token() -> Result<String> {
    debug!("Fetching access token via gcloud");

    let output = tokio::process::Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .await?;

    if !output.status.success() {
        return Err(VertexError::AuthError(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(VertexError::AuthError(
            "gcloud returned an empty token".to_string(),
        ));
    }

    Ok(token)
}

#[async_trait]
impl AgentGateway for VertexAgentGateway {
    fn model(&self) -> &Model {
        &self.profile.model
    }

    async fn create_session(&self) -> std::result::Result<Box<dyn AgentSession>, GatewayError> {
        self.open_session(&self.profile, tool_declarations(&self.tools))
            .await
    }

    async fn create_session_with_profile(
        &self,
        profile: &AgentProfile,
    ) -> std::result::Result<Box<dyn AgentSession>, GatewayError> {
        self.open_session(profile, Vec::new()).await
    }
}
