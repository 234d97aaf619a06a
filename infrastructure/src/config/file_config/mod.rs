//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agent;
mod logging;
mod repl;
mod research;
mod runtime;

pub use agent::FileAgentConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;
pub use research::{FileAnalysisConfig, FileResearchConfig};
pub use runtime::FileRuntimeConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Agent runtime connection settings
    pub runtime: FileRuntimeConfig,
    /// Agent settings
    pub agent: FileAgentConfig,
    /// Research defaults
    pub research: FileResearchConfig,
    /// Analysis defaults
    pub analysis: FileAnalysisConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepdesk_domain::{AnalysisFocus, Model, ResearchDepth};
    use figment::Figment;
    use figment::providers::{Format, Toml};

    fn from_toml(toml_str: &str) -> FileConfig {
        Figment::new()
            .merge(figment::providers::Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(toml_str))
            .extract()
            .unwrap()
    }

    #[test]
    fn test_deserialize_full_config() {
        let config = from_toml(
            r#"
[runtime]
project = "my-gcp-project"
location = "us-central1"

[agent]
model = "gemini-1.5-pro"

[research]
depth = "deep"

[analysis]
focus = "technical"

[repl]
show_progress = false
history_file = "~/.local/share/deepdesk/history.txt"
"#,
        );

        assert_eq!(config.runtime.project.as_deref(), Some("my-gcp-project"));
        assert_eq!(config.runtime.location.as_deref(), Some("us-central1"));
        assert_eq!(config.agent.parse_model(), Some(Model::Gemini15Pro));
        assert_eq!(
            config.research.parse_depth().unwrap(),
            Some(ResearchDepth::Deep)
        );
        assert_eq!(
            config.analysis.parse_focus().unwrap(),
            Some(AnalysisFocus::Technical)
        );
        assert!(!config.repl.show_progress);
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config = from_toml(
            r#"
[runtime]
project = "only-project"
"#,
        );

        assert_eq!(config.runtime.project.as_deref(), Some("only-project"));
        // Defaults should apply
        assert!(config.runtime.location.is_none());
        assert!(config.agent.model.is_none());
        assert!(config.repl.show_progress);
        assert!(config.logging.exchange_log.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.runtime.project.is_none());
        assert!(config.runtime.location.is_none());
        assert!(config.agent.model.is_none());
        assert!(config.research.depth.is_none());
        assert!(config.analysis.focus.is_none());
        assert!(config.repl.show_progress);
    }
}
