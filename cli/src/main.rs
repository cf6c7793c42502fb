//! CLI entrypoint for skillpath
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use skillpath_application::{NoProgress, PipelineOrchestrator, PipelineProgress};
use skillpath_domain::{AgentResult, Job};
use skillpath_infrastructure::{
    ConfigLoader, DuckDuckGoSearch, FileConfig, JsonlExchangeLogger, OpenAiCompletion,
};
use skillpath_presentation::{
    ApiHandlers, Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

type Orchestrator = PipelineOrchestrator<DuckDuckGoSearch, OpenAiCompletion>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    let _log_guard = init_logging(cli.verbose, config.logging.dir.as_deref());
    info!("Starting skillpath");

    let Some(command) = cli.command else {
        anyhow::bail!("No command given. Run `skillpath --help` for usage.");
    };

    // === Dependency Injection ===
    let search = Arc::new(DuckDuckGoSearch::new(&config.search)?);
    let completion = Arc::new(OpenAiCompletion::new(&config.completion)?);

    let cancellation = CancellationToken::new();
    spawn_interrupt_handler(cancellation.clone());

    let show_progress = !cli.quiet && !matches!(command, Command::Api { .. });
    let progress: Arc<dyn PipelineProgress> = if !show_progress {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let orchestrator = build_orchestrator(&config, search, completion, cancellation, progress);

    let format = cli.output;
    let succeeded = match command {
        Command::Jobs { location, sectors } => {
            let result = orchestrator.find_jobs(&location, &sectors).await;
            render(format, &result, |jobs| {
                ConsoleFormatter::format_jobs(&location, jobs)
            })
        }
        Command::Skills { description } => {
            let result = orchestrator.extract_skills(&description).await;
            render(format, &result, |skills| ConsoleFormatter::format_skills(skills))
        }
        Command::Roadmap { skill } => {
            let result = orchestrator.generate_roadmap(&skill).await;
            render(format, &result, |steps| {
                ConsoleFormatter::format_roadmap(&skill, steps)
            })
        }
        Command::Plan { title, description } => {
            let description = description.unwrap_or_else(|| title.clone());
            let result = orchestrator.plan_for_job(&Job::new(title, description)).await;
            render(format, &result, ConsoleFormatter::format_plan)
        }
        Command::Api { endpoint } => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request body from stdin")?;

            let handlers = ApiHandlers::new(Arc::new(orchestrator));
            let response = handlers.handle(endpoint, &body).await;
            println!("{}", response.body);
            response.is_success()
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize logging based on verbosity level, plus an optional daily log file.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "skillpath.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn build_orchestrator(
    config: &FileConfig,
    search: Arc<DuckDuckGoSearch>,
    completion: Arc<OpenAiCompletion>,
    cancellation: CancellationToken,
    progress: Arc<dyn PipelineProgress>,
) -> Orchestrator {
    let mut orchestrator = PipelineOrchestrator::new(search, completion, config.to_pipeline_params())
        .with_cancellation(cancellation)
        .with_progress(progress);

    if let Some(path) = &config.logging.exchange_log {
        match JsonlExchangeLogger::new(path) {
            Some(logger) => {
                info!("Logging backend exchanges to {}", logger.path().display());
                orchestrator = orchestrator.with_exchange_logger(Arc::new(logger));
            }
            None => warn!("Continuing without exchange log"),
        }
    }

    orchestrator
}

/// Cancel in-flight work on Ctrl-C.
fn spawn_interrupt_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling pipeline");
            token.cancel();
        }
    });
}

/// Print an agent result in the requested format. Returns whether it succeeded.
fn render<T: Serialize>(
    format: OutputFormat,
    result: &AgentResult<T>,
    text: impl FnOnce(&T) -> String,
) -> bool {
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(result)),
        OutputFormat::Text => match (result.data(), result.error()) {
            (Some(data), _) => println!("{}", text(data)),
            (None, Some(error)) => eprintln!("{}", ConsoleFormatter::format_error(error)),
            (None, None) => {}
        },
    }
    result.is_success()
}
