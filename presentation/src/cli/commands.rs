//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted report with headers
    Full,
    /// Only the report body
    Body,
    /// JSON output
    Json,
}

/// CLI arguments for deepdesk
#[derive(Parser, Debug)]
#[command(name = "deepdesk")]
#[command(author, version, about = "Research assistant agent on the Vertex AI runtime")]
#[command(long_about = r#"
deepdesk dispatches research and analysis requests to a Gemini-backed
research assistant and prints the resulting report.

Modes:
  deepdesk "AI Agents in Healthcare"           One-shot topic research
  deepdesk --analyze "<document text>"         One-shot document analysis
  deepdesk --team "AI Agents in Healthcare"    Specialist team research
  deepdesk --chat                              Interactive shell

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./deepdesk.toml     Project-level config
3. ~/.config/deepdesk/config.toml   Global config

GOOGLE_CLOUD_PROJECT and GOOGLE_CLOUD_LOCATION override the [runtime]
section of any config file.

Example:
  deepdesk "Rust async runtimes" --depth deep
  deepdesk --analyze "$(cat notes.md)" --focus business -o json
"#)]
pub struct Cli {
    /// Research topic (or document content with --analyze)
    pub input: Option<String>,

    /// Start the interactive shell
    #[arg(short, long)]
    pub chat: bool,

    /// Analyze the input as document content instead of researching it
    #[arg(short, long)]
    pub analyze: bool,

    /// Run the specialist research team on the topic
    #[arg(short, long)]
    pub team: bool,

    /// Research depth (quick, comprehensive, deep)
    #[arg(short, long, value_name = "DEPTH")]
    pub depth: Option<String>,

    /// Analysis focus (comprehensive, technical, business)
    #[arg(short, long, value_name = "FOCUS")]
    pub focus: Option<String>,

    /// Model backing the research agents
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
