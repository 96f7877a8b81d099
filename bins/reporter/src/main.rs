//! Mizan reporter
//!
//! Reads a ledger snapshot and prints one financial report as JSON.

mod cli;
mod commands;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mizan_core::journal::LedgerSnapshot;
use mizan_shared::{AppConfig, AppError};

use crate::cli::Args;
use crate::commands::Settings;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_tracing("mizan=info");
            let err = AppError::from(e);
            error!(code = err.error_code(), "{err}");
            return exit_code(&err);
        }
    };
    init_tracing(&config.log_filter);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            err.downcast_ref::<AppError>()
                .map_or(ExitCode::FAILURE, exit_code)
        }
    }
}

/// Logs go to stderr; stdout carries only the report.
fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args, config: &AppConfig) -> anyhow::Result<()> {
    let path = args
        .snapshot
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.snapshot.path));
    let snapshot = load_snapshot(&path)?;
    debug!(
        path = %path.display(),
        accounts = snapshot.accounts.len(),
        entries = snapshot.entries.len(),
        budgets = snapshot.budgets.len(),
        "loaded ledger snapshot"
    );

    let settings = Settings::resolve(config, args.status, args.epsilon);
    let report = commands::run(&args.report, &snapshot, settings)?;

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report).context("writing report")?;
    writeln!(out).context("writing report")?;
    Ok(())
}

fn load_snapshot(path: &Path) -> anyhow::Result<LedgerSnapshot> {
    let raw = std::fs::read_to_string(path)
        .map_err(AppError::from)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    LedgerSnapshot::from_json(&raw)
        .map_err(|e| AppError::Validation(format!("malformed snapshot: {e}")))
        .with_context(|| format!("parsing snapshot {}", path.display()))
}

fn exit_code(err: &AppError) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}
