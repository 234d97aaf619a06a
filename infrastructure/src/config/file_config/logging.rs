//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// exchange_log = "~/.local/share/deepdesk/exchanges.jsonl"
/// ```
///
/// When `exchange_log` is unset, exchange logging is disabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path to the JSONL exchange log
    pub exchange_log: Option<String>,
}
