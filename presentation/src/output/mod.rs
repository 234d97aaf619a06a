//! Report formatting for terminal output

pub mod console;

pub use console::ConsoleFormatter;
