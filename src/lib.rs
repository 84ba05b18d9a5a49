pub mod backoff;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod logging;
pub mod pipelines;
pub mod problems;
pub mod spinner;
pub mod stats;
pub mod store;

use std::process::ExitCode;
use anyhow::Context;
use clap::Parser;

pub fn run() -> ExitCode {
    let cli = cli::Cli::parse();

    // Logging first so everything below is captured
    logging::init_logging(cli.log_config());
    tracing::debug!("leetlog starting");

    let rt = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("❌ {}", e.message);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(commands::dispatch(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, kind = ?e.kind, "Command failed");
            eprintln!("❌ {}", e.message);
            ExitCode::FAILURE
        }
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime, error::LeetError> {
    let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    Ok(rt)
}
