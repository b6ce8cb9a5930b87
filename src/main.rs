mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, LINUX_CLIPBOARD_HINT};
use gqty_hero::app::{AppState, ClipboardNotifier, CopyFeedback, CopyOutcome, copy_headless};
use gqty_hero::clipboard::SystemClipboard;
use gqty_hero::config::Config;
use gqty_hero::content::HomepageContent;
use gqty_hero::notify::{ConsoleNotifier, ToastQueue, TracingDiagnostics};
use gqty_hero::ui::{self, theme::Theme};
use gqty_hero::utils::paths::{ensure_app_dir_exists, get_log_path};
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Copy { text }) => {
            init_stderr_logging();
            let text = text.unwrap_or_else(|| config.command.clone());
            return handle_copy(&config, text);
        }
        Some(Commands::Show) => {
            handle_show(&config);
        }
        None => {
            // No command - launch TUI
            init_file_logging()?;
            handle_tui(&config)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_copy(config: &Config, text: String) -> Result<ExitCode> {
    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let notifier = Arc::new(ConsoleNotifier::stdout());

    let outcome = runtime.block_on(copy_headless(
        Arc::new(SystemClipboard),
        &notifier,
        Arc::new(TracingDiagnostics),
        CopyFeedback::from(&config.toast),
        text,
    ));

    if outcome == CopyOutcome::Copied && cfg!(target_os = "linux") {
        eprintln!("{LINUX_CLIPBOARD_HINT}");
    }

    Ok(outcome.into())
}

fn handle_show(config: &Config) {
    let content = HomepageContent::new(config.command.clone());
    print!("{}", content.to_plain_text());
}

fn handle_tui(config: &Config) -> Result<()> {
    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let toasts = Arc::new(ToastQueue::from_config(&config.toast));
    let copier = ClipboardNotifier::new(
        runtime.handle().clone(),
        Arc::new(SystemClipboard),
        &toasts,
        Arc::new(TracingDiagnostics),
    )
    .with_feedback(CopyFeedback::from(&config.toast));

    let state = AppState::new(
        HomepageContent::new(config.command.clone()),
        Theme::from_config(config),
        toasts,
        copier,
    );

    ui::run_tui(state)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the terminal, so logs go to a file instead.
fn init_file_logging() -> Result<()> {
    ensure_app_dir_exists()?;
    let log_path = get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    info!("logging to {}", log_path.display());
    Ok(())
}
