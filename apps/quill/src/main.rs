//! # Quill
//!
//! Terminal front end: loads the post collection, runs one command (or an
//! interactive shell) against the controller and prints the resulting screen.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use quill_core::BlogController;
use quill_core::ports::Confirm;
use quill_infra::{FileKeyValueStore, FixedConfirm, KeyValuePostStore, SystemClock};

mod cli;
mod commands;
mod config;
mod error;
mod render;
mod shell;
mod telemetry;
mod terminal;

use cli::{Cli, Command};
use config::AppConfig;
use render::Output;
use telemetry::TelemetryConfig;
use terminal::Terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().with_overrides(
        cli.data_file.clone(),
        cli.storage_key.clone(),
        cli.strict,
    );
    let command = cli.command.unwrap_or(Command::Dashboard);
    let out = Output::new(cli.json);

    let terminal = Arc::new(Terminal::new());
    let confirm: Arc<dyn Confirm> = if command.prompts() {
        terminal.clone()
    } else {
        Arc::new(FixedConfirm(true))
    };

    let mut controller = match open(&config, confirm).await {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Shell => shell::run(&mut controller, terminal, &out).await,
        command => commands::run(command, &mut controller, &out).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out.error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn open(config: &AppConfig, confirm: Arc<dyn Confirm>) -> anyhow::Result<BlogController> {
    tracing::debug!(
        data_file = %config.data_file.display(),
        storage_key = %config.storage_key,
        strict = config.strict_load,
        "Opening post store"
    );

    let store = KeyValuePostStore::new(FileKeyValueStore::new(&config.data_file))
        .with_key(config.storage_key.clone())
        .strict(config.strict_load);

    BlogController::open(Arc::new(store), Arc::new(SystemClock), confirm)
        .await
        .with_context(|| format!("failed to load posts from {}", config.data_file.display()))
}
