//! Presentation layer for deepdesk
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive research shell.

pub mod cli;
pub mod output;
pub mod progress;
pub mod shell;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use shell::{ResearchRepl, ShellCommand};
