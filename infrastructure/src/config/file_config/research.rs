//! Research and analysis defaults from TOML (`[research]` / `[analysis]` sections)

use deepdesk_domain::{AnalysisFocus, DomainError, ResearchDepth};
use serde::{Deserialize, Serialize};

/// Raw research defaults from TOML
///
/// # Example
///
/// ```toml
/// [research]
/// depth = "comprehensive"        # "quick", "comprehensive", "deep"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResearchConfig {
    /// Default research depth when none is given
    pub depth: Option<String>,
}

impl FileResearchConfig {
    /// Parse the depth string, rejecting unknown values.
    pub fn parse_depth(&self) -> Result<Option<ResearchDepth>, DomainError> {
        self.depth.as_deref().map(str::parse).transpose()
    }
}

/// Raw analysis defaults from TOML
///
/// # Example
///
/// ```toml
/// [analysis]
/// focus = "comprehensive"        # "comprehensive", "technical", "business"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Default analysis focus when none is given
    pub focus: Option<String>,
}

impl FileAnalysisConfig {
    /// Parse the focus string, rejecting unknown values.
    pub fn parse_focus(&self) -> Result<Option<AnalysisFocus>, DomainError> {
        self.focus.as_deref().map(str::parse).transpose()
    }
}
