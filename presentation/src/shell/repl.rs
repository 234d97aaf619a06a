//! REPL (Read-Eval-Print Loop) for the interactive research shell

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use deepdesk_application::ports::agent_gateway::AgentGateway;
use deepdesk_application::ports::exchange_logger::ExchangeLogger;
use deepdesk_application::{
    AnalyzeDocumentInput, AnalyzeDocumentUseCase, ResearchTopicInput, ResearchTopicUseCase,
};
use deepdesk_domain::{AnalysisFocus, Model, ResearchDepth};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// A parsed shell input line.
///
/// The command word is matched case-insensitively; the argument keeps
/// its original casing and inner whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `research <topic>`
    Research(String),
    /// `analyze <content>`
    Analyze(String),
    /// `quit` on its own line
    Quit,
    /// Blank line, nothing to do
    Empty,
    /// Anything else
    Usage,
}

impl ShellCommand {
    /// Parse a raw input line into a shell command.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return ShellCommand::Empty;
        }
        if trimmed.eq_ignore_ascii_case("quit") {
            return ShellCommand::Quit;
        }

        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };

        if head.eq_ignore_ascii_case("research") {
            ShellCommand::Research(rest.to_string())
        } else if head.eq_ignore_ascii_case("analyze") {
            ShellCommand::Analyze(rest.to_string())
        } else {
            ShellCommand::Usage
        }
    }
}

/// Interactive research REPL
pub struct ResearchRepl {
    research: ResearchTopicUseCase,
    analyze: AnalyzeDocumentUseCase,
    model: Model,
    depth: ResearchDepth,
    focus: AnalysisFocus,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ResearchRepl {
    /// Create a new ResearchRepl
    pub fn new(gateway: Arc<dyn AgentGateway>) -> Self {
        let model = gateway.model().clone();
        Self {
            research: ResearchTopicUseCase::new(Arc::clone(&gateway)),
            analyze: AnalyzeDocumentUseCase::new(gateway),
            model,
            depth: ResearchDepth::default(),
            focus: AnalysisFocus::default(),
            show_progress: true,
            history_file: None,
        }
    }

    /// Attach an exchange logger to both use cases
    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.research = self.research.with_exchange_logger(Arc::clone(&logger));
        self.analyze = self.analyze.with_exchange_logger(logger);
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the depth used for `research` commands
    pub fn with_depth(mut self, depth: ResearchDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Set the focus used for `analyze` commands
    pub fn with_focus(mut self, focus: AnalysisFocus) -> Self {
        self.focus = focus;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("deepdesk").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let command = ShellCommand::parse(&line);

                    // Skip empty lines
                    if command == ShellCommand::Empty {
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line.trim());

                    if self.handle_command(command).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        deepdesk - Research Assistant        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model);
        println!();
        println!("Commands:");
        println!("  research <topic>   - Research a topic");
        println!("  analyze <content>  - Analyze pasted content");
        println!("  quit               - Exit");
        println!();
    }

    /// Handle a parsed command. Returns true if should exit.
    ///
    /// A command word with no argument prints a prompt and dispatches
    /// nothing.
    async fn handle_command(&self, command: ShellCommand) -> bool {
        match command {
            ShellCommand::Quit => {
                println!("Goodbye!");
                true
            }
            ShellCommand::Research(topic) if topic.is_empty() => {
                println!("Please provide a research topic");
                false
            }
            ShellCommand::Research(topic) => {
                self.run_research(&topic).await;
                false
            }
            ShellCommand::Analyze(content) if content.is_empty() => {
                println!("Please provide content to analyze");
                false
            }
            ShellCommand::Analyze(content) => {
                self.run_analysis(&content).await;
                false
            }
            ShellCommand::Usage => {
                println!("Unknown command. Use 'research <topic>' or 'analyze <content>'");
                false
            }
            ShellCommand::Empty => false,
        }
    }

    async fn run_research(&self, topic: &str) {
        println!();

        let input = ResearchTopicInput::new(topic).with_depth(self.depth);

        let report = if self.show_progress {
            let progress = ProgressReporter::new();
            self.research.execute_with_progress(input, &progress).await
        } else {
            self.research.execute(input).await
        };

        println!("{}", ConsoleFormatter::format_research(&report));
    }

    async fn run_analysis(&self, content: &str) {
        println!();

        let input = AnalyzeDocumentInput::new(content).with_focus(self.focus);

        let report = if self.show_progress {
            let progress = ProgressReporter::new();
            self.analyze.execute_with_progress(input, &progress).await
        } else {
            self.analyze.execute(input).await
        };

        println!("{}", ConsoleFormatter::format_analysis(&report));
    }
}
