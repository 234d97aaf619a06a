//! CLI entrypoint for deepdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use deepdesk_application::ports::exchange_logger::ExchangeLogger;
use deepdesk_application::{
    AnalyzeDocumentInput, AnalyzeDocumentUseCase, ResearchTopicInput, ResearchTopicUseCase,
    TeamResearchInput, TeamResearchUseCase,
};
use deepdesk_domain::{AnalysisFocus, Model, ResearchDepth};
use deepdesk_infrastructure::{
    research_tool_spec, ConfigLoader, JsonlExchangeLogger, VertexAgentGateway, VertexGatewayConfig,
};
use deepdesk_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter, ResearchRepl};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    info!("Starting deepdesk");

    // Flags win over config, config over defaults
    let model = match &cli.model {
        Some(name) => Model::from(name.as_str()),
        None => config.agent.parse_model().unwrap_or_default(),
    };

    let depth = match &cli.depth {
        Some(value) => value
            .parse::<ResearchDepth>()
            .context("Invalid --depth value")?,
        None => config
            .research
            .parse_depth()
            .context("Invalid research.depth in configuration")?
            .unwrap_or_default(),
    };

    let focus = match &cli.focus {
        Some(value) => value
            .parse::<AnalysisFocus>()
            .context("Invalid --focus value")?,
        None => config
            .analysis
            .parse_focus()
            .context("Invalid analysis.focus in configuration")?
            .unwrap_or_default(),
    };

    // === Dependency Injection ===
    // Create the infrastructure adapter (Vertex AI gateway)
    let profile = config.agent.research_profile(model.clone());
    let gateway = Arc::new(VertexAgentGateway::new(
        VertexGatewayConfig::from(&config.runtime),
        profile,
        research_tool_spec(),
    ));

    let exchange_logger = config
        .logging
        .exchange_log
        .as_ref()
        .and_then(JsonlExchangeLogger::new)
        .map(|logger| Arc::new(logger) as Arc<dyn ExchangeLogger>);

    // Interactive shell when requested or when no input is given
    let input_text = match (cli.chat, cli.input) {
        (true, _) | (false, None) => {
            let mut repl = ResearchRepl::new(gateway)
                .with_depth(depth)
                .with_focus(focus)
                .with_progress(config.repl.show_progress && !cli.quiet)
                .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from));

            if let Some(logger) = exchange_logger {
                repl = repl.with_exchange_logger(logger);
            }

            repl.run().await?;
            return Ok(());
        }
        (false, Some(text)) => text,
    };

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|               deepdesk - Research Assistant                |");
        println!("+============================================================+");
        println!();
        if !cli.analyze {
            println!("Topic: {}", input_text);
        }
        println!("Model: {}", model);
        println!();
    }

    // One-shot modes
    if cli.team {
        let use_case = match exchange_logger {
            Some(logger) => TeamResearchUseCase::new(gateway).with_exchange_logger(logger),
            None => TeamResearchUseCase::new(gateway),
        };

        let input = TeamResearchInput::new(input_text);
        let report = if cli.quiet {
            use_case.execute(input).await
        } else {
            let progress = ProgressReporter::new();
            use_case.execute_with_progress(input, &progress).await
        };

        let output = match cli.output {
            OutputFormat::Full => ConsoleFormatter::format_team(&report),
            OutputFormat::Body => report.synthesis.clone(),
            OutputFormat::Json => ConsoleFormatter::format_json(&report),
        };
        println!("{}", output);
    } else if cli.analyze {
        let use_case = match exchange_logger {
            Some(logger) => AnalyzeDocumentUseCase::new(gateway).with_exchange_logger(logger),
            None => AnalyzeDocumentUseCase::new(gateway),
        };

        let input = AnalyzeDocumentInput::new(input_text).with_focus(focus);
        let report = if cli.quiet {
            use_case.execute(input).await
        } else {
            let progress = ProgressReporter::new();
            use_case.execute_with_progress(input, &progress).await
        };

        let output = match cli.output {
            OutputFormat::Full => ConsoleFormatter::format_analysis(&report),
            OutputFormat::Body => report.body.clone(),
            OutputFormat::Json => ConsoleFormatter::format_json(&report),
        };
        println!("{}", output);
    } else {
        let use_case = match exchange_logger {
            Some(logger) => ResearchTopicUseCase::new(gateway).with_exchange_logger(logger),
            None => ResearchTopicUseCase::new(gateway),
        };

        let input = ResearchTopicInput::new(input_text).with_depth(depth);
        let report = if cli.quiet {
            use_case.execute(input).await
        } else {
            let progress = ProgressReporter::new();
            use_case.execute_with_progress(input, &progress).await
        };

        let output = match cli.output {
            OutputFormat::Full => ConsoleFormatter::format_research(&report),
            OutputFormat::Body => report.body.clone(),
            OutputFormat::Json => ConsoleFormatter::format_json(&report),
        };
        println!("{}", output);
    }

    Ok(())
}
