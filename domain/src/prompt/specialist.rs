//! Specialist roles for team research

use serde::{Deserialize, Serialize};

/// A specialist on the research team (Value Object)
///
/// Each role carries its own standing instruction and task prompt. The
/// team runs every role in [`SpecialistRole::ALL`] order and merges the
/// findings afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialistRole {
    Technical,
    Business,
}

impl SpecialistRole {
    /// All roles, in dispatch order
    pub const ALL: [SpecialistRole; 2] = [SpecialistRole::Technical, SpecialistRole::Business];

    /// Agent name used on the runtime
    pub fn name(&self) -> &'static str {
        match self {
            SpecialistRole::Technical => "technical_researcher",
            SpecialistRole::Business => "business_analyst",
        }
    }

    /// Human-readable name for reports and console output
    pub fn display_name(&self) -> &'static str {
        match self {
            SpecialistRole::Technical => "Technical Researcher",
            SpecialistRole::Business => "Business Analyst",
        }
    }

    /// Standing instruction for this specialist's agent
    pub fn instruction(&self) -> &'static str {
        match self {
            SpecialistRole::Technical => {
                r#"You are a Technical Research Specialist. Focus on:
- Technical specifications and implementations
- Architecture and system design
- Performance metrics and benchmarks
- Technical challenges and solutions

Provide detailed technical analysis with specific examples."#
            }
            SpecialistRole::Business => {
                r#"You are a Business Analysis Specialist. Focus on:
- Market trends and opportunities
- Business models and revenue streams
- Competitive landscape
- ROI and business impact analysis

Provide strategic business insights with market data."#
            }
        }
    }

    /// Task prompt posed to this specialist for a given topic
    pub fn task_prompt(&self, topic: &str) -> String {
        match self {
            SpecialistRole::Technical => format!(
                r#"Provide technical analysis of: {}

Include:
- Technical architecture requirements
- Implementation challenges
- Performance considerations
- Technology stack recommendations"#,
                topic
            ),
            SpecialistRole::Business => format!(
                r#"Provide business analysis of: {}

Include:
- Market size and growth potential
- Business model opportunities
- Competitive analysis
- Go-to-market strategy recommendations"#,
                topic
            ),
        }
    }
}

impl std::fmt::Display for SpecialistRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
