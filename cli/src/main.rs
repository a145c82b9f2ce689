//! CLI entrypoint for colloquy
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colloquy_application::{
    ConversationOutcome, ConversationProgress, RunConversationInput, RunConversationUseCase,
    TranscriptSink,
};
use colloquy_domain::{ProviderKind, Variant};
use colloquy_infrastructure::{
    ConfigLoader, FileConfig, JsonTranscriptWriter, JsonlConversationLogger, build_registry,
    catalog_for,
};
use colloquy_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // A missing .env is fine; the environment may already hold the key.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting colloquy");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    if !config.output.color {
        ConsoleFormatter::disable_color();
    }

    let providers = config.providers.to_provider_config();

    if cli.list_models {
        for (kind, title) in [
            (ProviderKind::Local, "Local models:"),
            (ProviderKind::Hosted, "Hosted models:"),
        ] {
            let models = catalog_for(kind, &providers).list_models().await;
            println!("{}", ConsoleFormatter::model_list(title, &models));
        }
        return Ok(());
    }

    for issue in config.check()? {
        warn!("{}", issue.message);
    }

    // === Dependency Injection ===
    let registry = Arc::new(build_registry(&providers));
    let mut use_case = RunConversationUseCase::new(registry);
    if let Some(path) = config.event_log_path()
        && let Some(logger) = JsonlConversationLogger::new(&path)
    {
        info!("Writing conversation events to {}", logger.path().display());
        use_case = use_case.with_logger(Arc::new(logger));
    }

    let topic = config.conversation.topic();
    let participants = config.participants();
    let params = config.conversation_params();

    let cancellation = CancellationToken::new();
    {
        let cancellation = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancellation.cancel();
            }
        });
    }

    println!(
        "{}",
        ConsoleFormatter::run_header(&topic, &participants, params.max_turns)
    );

    let input = RunConversationInput::new(topic, participants)
        .with_params(params)
        .with_cancellation(cancellation);

    let outcome = if cli.stream {
        run_streaming(&use_case, input, cli.quiet).await?
    } else {
        let progress: Box<dyn ConversationProgress> = if cli.quiet {
            Box::new(SimpleProgress::quiet())
        } else if !std::io::stderr().is_terminal() {
            // No spinner to watch; announce each speaker on stdout instead.
            Box::new(SimpleProgress::new())
        } else {
            Box::new(ProgressReporter::new())
        };
        use_case
            .execute_with_progress(input, progress.as_ref())
            .await?
    };

    if outcome.is_interrupted() {
        println!("{}", ConsoleFormatter::interrupted());
        return Ok(());
    }

    if let Some(summary) = &outcome.usage {
        println!("{}", ConsoleFormatter::cost_summary(summary));
    }

    let sink = JsonTranscriptWriter::new(config.transcript_path());
    sink.persist(&outcome.transcript)?;
    println!(
        "{}",
        ConsoleFormatter::completion(&sink.location(), outcome.turns_executed())
    );

    Ok(())
}

/// Pull one turn at a time and print it as soon as it is ready.
async fn run_streaming(
    use_case: &RunConversationUseCase,
    input: RunConversationInput,
    quiet: bool,
) -> Result<ConversationOutcome> {
    let mut steps = use_case.steps(input)?;

    while let Some(speaker) = steps.upcoming_speaker() {
        if !quiet {
            println!("\n{}", ConsoleFormatter::speaking(speaker));
        }
        let Some(report) = steps.next_turn().await else {
            break;
        };
        println!("{}", ConsoleFormatter::turn(&report));
    }

    Ok(steps.finish())
}

/// CLI flags win over every configuration source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(variant) = cli.variant {
        config.conversation.variant = Variant::from(variant);
    }
    if let Some(topic) = &cli.topic {
        config.conversation.topic = Some(topic.clone());
    }
    if let Some(turns) = cli.turns {
        config.conversation.max_turns = Some(turns);
    }
    if let Some(pacing_ms) = cli.pacing_ms {
        config.conversation.pacing_ms = pacing_ms;
    }
    if cli.no_accounting {
        config.conversation.accounting = Some(false);
    }
    if let Some(base_url) = &cli.base_url {
        config.providers.local.base_url = base_url.clone();
    }
    if let Some(api_key) = &cli.api_key {
        config.providers.hosted.api_key = Some(api_key.clone());
    }
    if let Some(output) = &cli.output {
        config.output.transcript_path = Some(output.to_string_lossy().into_owned());
    }
    if let Some(event_log) = &cli.event_log {
        config.output.event_log = Some(event_log.to_string_lossy().into_owned());
    }
}

/// Initialize logging based on verbosity level.
///
/// With `--log-file`, logs go to that file through a non-blocking writer;
/// the returned guard must live until exit so buffered lines are flushed.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}
