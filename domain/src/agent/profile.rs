//! Agent profile entity

use crate::core::model::Model;
use crate::prompt::specialist::SpecialistRole;
use crate::prompt::template::PromptTemplate;
use serde::Serialize;

/// Configuration of an agent on the external runtime (Entity)
///
/// A profile is everything the runtime needs to stand an agent up: a
/// name, a human-readable description, the backing model, and the
/// standing instruction. Tool declarations are attached separately at
/// dispatch time.
#[derive(Debug, Clone, Serialize)]
pub struct AgentProfile {
    pub name: String,
    pub description: String,
    pub model: Model,
    pub instruction: String,
}

impl AgentProfile {
    pub fn new(name: impl Into<String>, model: Model) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            model,
            instruction: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// The default research assistant profile
    pub fn research_assistant(model: Model) -> Self {
        Self::new("research_assistant", model)
            .with_description(
                "A professional research assistant for technical and business analysis",
            )
            .with_instruction(PromptTemplate::assistant_instruction())
    }

    /// Profile for a team specialist
    pub fn specialist(role: SpecialistRole, model: Model) -> Self {
        Self::new(role.name(), model).with_instruction(role.instruction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_assistant_profile() {
        let profile = AgentProfile::research_assistant(Model::default());
        assert_eq!(profile.name, "research_assistant");
        assert!(profile.description.contains("professional research assistant"));
        assert!(profile.instruction.contains("Professional Research Assistant"));
    }

    #[test]
    fn test_specialist_profile_uses_role_name() {
        let profile = AgentProfile::specialist(SpecialistRole::Technical, Model::default());
        assert_eq!(profile.name, "technical_researcher");
        assert!(profile.instruction.contains("Technical Research Specialist"));
        assert!(profile.description.is_empty());
    }
}
