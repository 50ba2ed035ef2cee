//! CLI entrypoint for poliscope
//!
//! Wires the layers together: config is loaded, the API client is built,
//! and control goes either to a one-shot command (--list, --ask) or to
//! the interactive terminal UI.

use anyhow::{bail, Context, Result};
use clap::Parser;
use poliscope_application::{AdvisorQuestion, LoadCatalogUseCase};
use poliscope_domain::{filter_by_type, sort_policies};
use poliscope_infrastructure::{fallback_policies, ApiClient, ConfigLoader, FileConfig};
use poliscope_presentation::{Cli, ConsoleFormatter, SimpleProgress, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|err| anyhow::anyhow!("configuration error: {err}"))?
    };

    let one_shot = cli.list || cli.ask.is_some() || cli.policy.is_some();
    let _log_guard = init_logging(cli.verbose, one_shot);

    info!("starting poliscope");

    let client = Arc::new(ApiClient::new(
        config.api.base_url.clone(),
        config.api.model.clone(),
        config.api.timeout_secs,
    )?);

    let fallback = if config.catalog.use_fallback {
        fallback_policies()
    } else {
        Vec::new()
    };

    if cli.list {
        return run_list(&cli, client, fallback).await;
    }

    if cli.ask.is_some() {
        return run_ask(&cli, client, fallback).await;
    }

    if cli.policy.is_some() {
        return run_show(&cli, client, fallback).await;
    }

    run_tui(&config, client, fallback).await
}

/// One-shot commands log to stderr; the TUI logs to a file so output
/// does not corrupt the alternate screen.
fn init_logging(verbose: u8, one_shot: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    if one_shot {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        None
    } else {
        let log_dir = dirs::data_local_dir()
            .map(|dir| dir.join("poliscope"))
            .unwrap_or_else(|| PathBuf::from("."));
        let appender = tracing_appender::rolling::daily(log_dir, "poliscope.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    }
}

async fn run_list(cli: &Cli, client: Arc<ApiClient>, fallback: Vec<poliscope_domain::Policy>) -> Result<()> {
    let progress = SimpleProgress::new(cli.quiet);
    progress.set_message("Fetching policy catalog...");
    let load = LoadCatalogUseCase::new(client, fallback).execute().await;
    progress.finish();

    let mut policies = match cli.policy_type {
        Some(policy_type) => filter_by_type(&load.policies, policy_type),
        None => load.policies.clone(),
    };
    sort_policies(&mut policies, cli.sort);

    println!(
        "{}",
        ConsoleFormatter::format_listing(&policies, load.from_fallback)
    );
    Ok(())
}

async fn run_ask(cli: &Cli, client: Arc<ApiClient>, fallback: Vec<poliscope_domain::Policy>) -> Result<()> {
    let question = cli.ask.as_deref().unwrap_or_default();
    let Some(policy_id) = cli.policy.as_deref() else {
        bail!("--ask requires --policy <POLICY_ID>; run --list to see the ids");
    };

    let load = LoadCatalogUseCase::new(Arc::clone(&client), fallback)
        .execute()
        .await;
    let policy = load
        .policies
        .iter()
        .find(|p| p.id == policy_id)
        .with_context(|| format!("unknown policy id: {policy_id}"))?
        .clone();

    let progress = SimpleProgress::new(cli.quiet);
    progress.set_message(format!("Asking the advisor about {}...", policy.name));
    let reply = client
        .ask_advisor(&AdvisorQuestion {
            policy,
            question: question.to_string(),
            history: Vec::new(),
        })
        .await;
    progress.finish();

    let reply = reply.context("the advisor request failed")?;
    println!("{}", ConsoleFormatter::format_answer(question, &reply));
    Ok(())
}

async fn run_show(cli: &Cli, client: Arc<ApiClient>, fallback: Vec<poliscope_domain::Policy>) -> Result<()> {
    let policy_id = cli.policy.as_deref().unwrap_or_default();

    let progress = SimpleProgress::new(cli.quiet);
    progress.set_message("Fetching policy catalog...");
    let load = LoadCatalogUseCase::new(client, fallback).execute().await;
    progress.finish();

    let policy = load
        .policies
        .iter()
        .find(|p| p.id == policy_id)
        .with_context(|| format!("unknown policy id: {policy_id}"))?;

    println!("{}", ConsoleFormatter::format_policy(policy));
    Ok(())
}

async fn run_tui(
    config: &FileConfig,
    client: Arc<ApiClient>,
    fallback: Vec<poliscope_domain::Policy>,
) -> Result<()> {
    let mut app = TuiApp::new(
        Arc::clone(&client),
        client,
        fallback,
        config.ui.question_rotation_secs,
    );
    app.run().await?;
    Ok(())
}
