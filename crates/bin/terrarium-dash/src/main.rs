//! # terrarium-dash — terrarium controller dashboard
//!
//! Composition root that wires the adapters together and runs one CLI command.
//!
//! ## Responsibilities
//! - Parse the command line and load configuration (file, env vars, flags)
//! - Install the `tracing` subscriber (stderr, so logs never mix with the panel)
//! - Construct the HTTP controller client and the console surface/notifier
//! - Construct application services, injecting adapters via port traits
//! - For `settings`: show, patch or reset the controller configuration
//! - For `watch`: spawn the poll loop, read key commands, stop on `q`/Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;
mod interactive;
mod report;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use terrarium_adapter_console::{ConsoleNotifier, ConsoleSurface};
use terrarium_adapter_http_reqwest::HttpController;
use terrarium_app::poll_loop;
use terrarium_app::services::dashboard_poller::{DashboardPoller, RefreshOutcome};
use terrarium_app::services::diagnostics_service::DiagnosticsService;
use terrarium_app::services::settings_service::SettingsService;

use crate::cli::{Cli, Command, SettingsAction};
use crate::report::{HealthSummary, HistoryTable, SettingsSummary};
use crate::config::Config;

type ConsolePoller = DashboardPoller<
    HttpController,
    ConsoleSurface<std::io::Stdout>,
    ConsoleNotifier<std::io::Stdout>,
>;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref(), cli.url.as_deref())
        .context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    let controller = HttpController::new(&config.controller)
        .context("failed to build controller client")?;
    tracing::info!(base_url = %controller.base_url(), "using controller");

    run(cli.subcommand(), &config, controller).await
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn console_poller(config: &Config, controller: HttpController) -> ConsolePoller {
    DashboardPoller::new(
        controller,
        ConsoleSurface::stdout(),
        ConsoleNotifier::stdout(),
    )
    .with_labels(config.labels.clone())
}

async fn run(
    command: Command,
    config: &Config,
    controller: HttpController,
) -> anyhow::Result<ExitCode> {
    match command {
        Command::Watch { period } => {
            let period = period.map_or_else(|| config.poll_period(), Duration::from_secs);
            watch(console_poller(config, controller), period).await;
            Ok(ExitCode::SUCCESS)
        }
        Command::State => match console_poller(config, controller).refresh().await {
            RefreshOutcome::Rendered => Ok(ExitCode::SUCCESS),
            RefreshOutcome::Ignored { status } => {
                anyhow::bail!("controller answered with status `{status}`")
            }
            RefreshOutcome::Failed => anyhow::bail!("failed to fetch controller state"),
        },
        Command::ToggleMock => {
            console_poller(config, controller)
                .toggle_mock()
                .await
                .context("failed to toggle mock mode")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::TestSensor => {
            let outcome = console_poller(config, controller)
                .test_sensor()
                .await
                .context("failed to run sensor test")?;
            Ok(exit_code(outcome.is_passed()))
        }
        Command::Health => {
            let health = DiagnosticsService::new(controller)
                .health()
                .await
                .context("failed to fetch controller health")?;
            print!("{}", HealthSummary(&health));
            Ok(exit_code(health.status.is_healthy()))
        }
        Command::History { limit } => {
            let page = DiagnosticsService::new(controller)
                .history(limit)
                .await
                .context("failed to fetch history")?;
            print!("{}", HistoryTable(&page));
            Ok(ExitCode::SUCCESS)
        }
        Command::Settings { action } => {
            settings(action.unwrap_or(SettingsAction::Show), controller).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn settings(action: SettingsAction, controller: HttpController) -> anyhow::Result<()> {
    let service = SettingsService::new(controller);
    match action {
        SettingsAction::Show => {
            let settings = service
                .settings()
                .await
                .context("failed to fetch settings")?;
            print!("{}", SettingsSummary(&settings));
        }
        SettingsAction::Set(args) => {
            let settings = service
                .update(&args.into_patch())
                .await
                .context("failed to update settings")?;
            print!("{}", SettingsSummary(&settings));
        }
        SettingsAction::Reset => {
            let message = service.reset().await.context("failed to reset settings")?;
            println!("{message}");
        }
    }
    Ok(())
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn watch(poller: ConsolePoller, period: Duration) {
    let poller = Arc::new(poller);
    let handle = poll_loop::spawn(Arc::clone(&poller), period);

    let stdin = BufReader::new(tokio::io::stdin());
    let exit = interactive::run(&*poller, stdin, shutdown_signal()).await;
    tracing::info!(?exit, "stopping dashboard");

    handle.stop().await;
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
