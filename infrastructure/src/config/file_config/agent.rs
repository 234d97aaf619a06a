//! Agent configuration from TOML (`[agent]` section)

use deepdesk_domain::{AgentProfile, Model};
use serde::{Deserialize, Serialize};

/// Raw agent configuration from TOML
///
/// # Example
///
/// ```toml
/// [agent]
/// model = "gemini-2.0-flash-exp"
/// # name = "research_assistant"
/// # instruction = "You are a terse research assistant."
/// ```
///
/// Name, description, and instruction override the corresponding fields
/// of the default research assistant profile when set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Model backing the research agents
    pub model: Option<String>,
    /// Agent name override
    pub name: Option<String>,
    /// Agent description override
    pub description: Option<String>,
    /// Standing instruction override
    pub instruction: Option<String>,
}

impl FileAgentConfig {
    /// Parse the model string into a Model enum.
    ///
    /// Unknown names become `Model::Custom`; an empty or whitespace-only
    /// name is treated as unset.
    pub fn parse_model(&self) -> Option<Model> {
        match self.model.as_deref() {
            None => None,
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(Model::from(s)),
        }
    }

    /// Build the research assistant profile for `model`, applying any
    /// configured overrides.
    pub fn research_profile(&self, model: Model) -> AgentProfile {
        let mut profile = AgentProfile::research_assistant(model);
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(description) = &self.description {
            profile.description = description.clone();
        }
        if let Some(instruction) = &self.instruction {
            profile.instruction = instruction.clone();
        }
        profile
    }
}
