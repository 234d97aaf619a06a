//! Configuration loading for deepdesk
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `GOOGLE_CLOUD_PROJECT` / `GOOGLE_CLOUD_LOCATION` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./deepdesk.toml` or `./.deepdesk.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/deepdesk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAgentConfig, FileAnalysisConfig, FileConfig, FileLoggingConfig, FileReplConfig,
    FileResearchConfig, FileRuntimeConfig,
};
pub use loader::ConfigLoader;
