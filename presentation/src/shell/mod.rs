//! Interactive research shell

pub mod repl;

pub use repl::{ResearchRepl, ShellCommand};
