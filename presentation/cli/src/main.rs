use std::io;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;

mod cli;
mod config;
mod console;
mod setup;

use business::domain::credentials::use_cases::update::UpdateCredentialsParams;
use cli::Cli;
use config::app_config::AppConfig;
use console::usage::write_usage;
use setup::dependency_injection::DependencyContainer;

/// Firebase credentials updater entry point
///
/// Takes one argument, a service account JSON file or its content, and
/// rewrites the project's `.env` and credential file from it.
/// - config/: project root and follow-up commands
/// - setup/: dependency injection
/// - console/: operator-facing output
fn main() -> anyhow::Result<ExitCode> {
    // 1. Parse arguments; a wrong argument count touches no files
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(_) => return Ok(usage_error()),
    };
    let Some(input) = cli.single_input() else {
        return Ok(usage_error());
    };

    // 2. Initialize tracing with RUST_LOG env filter, on stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // 3. Load configuration
    let config = AppConfig::load(cli.project_root.clone())?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the update
    let report = container
        .update_credentials
        .execute(UpdateCredentialsParams {
            input: input.to_string(),
            requested_at: Local::now(),
        })
        .context("failed to update Firebase credentials")?;

    container.reporter.completed(&config.follow_up, &report);
    Ok(ExitCode::SUCCESS)
}

fn usage_error() -> ExitCode {
    let _ = write_usage(&mut io::stdout(), env!("CARGO_BIN_NAME"));
    ExitCode::from(1)
}
