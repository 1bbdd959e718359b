//! maven-version-checker - CI step reporting outdated Maven artifacts
//!
//! Inputs come from the `INPUT_*` and `GITHUB_*` environment variables set
//! by the Actions runner, or from the equivalent flags.

use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::Parser;
use maven_version_checker::cli::{ActionInputs, LogFormat};
use maven_version_checker::logging;
use maven_version_checker::orchestrator::Orchestrator;
use maven_version_checker::output::FileCommandSink;
use maven_version_checker::registry::{HttpClient, MavenCentralClient};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

const FIRST_RELEASE_YEAR: i32 = 2024;

#[tokio::main]
async fn main() -> ExitCode {
    let inputs = match ActionInputs::try_parse() {
        Ok(inputs) => inputs,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            logging::init(LogFormat::default());
            let message = e.to_string();
            let first_line = message.lines().next().unwrap_or_default();
            tracing::error!("{}", first_line.trim_start_matches("error: "));
            return ExitCode::FAILURE;
        }
    };
    logging::init(inputs.log_format);

    print_banner();

    match run(inputs).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_banner() {
    let year = Utc::now().year();
    let copyright = if year > FIRST_RELEASE_YEAR {
        format!("{}-{}", FIRST_RELEASE_YEAR, year)
    } else {
        FIRST_RELEASE_YEAR.to_string()
    };
    println!("Maven Version Checker {}", env!("CARGO_PKG_VERSION"));
    println!("Copyright (C) {} {}", copyright, env!("CARGO_PKG_AUTHORS"));
    println!();
}

/// Main application logic
async fn run(inputs: ActionInputs) -> anyhow::Result<()> {
    let config = inputs.into_config()?;
    tracing::debug!(
        location = %config.location.display(),
        registry = %config.registry_url,
        "starting"
    );

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling pending queries");
            on_signal.cancel();
        }
    });

    let client = HttpClient::new().context("failed to build HTTP client")?;
    let registry = MavenCentralClient::with_base_url(client, config.registry_url.clone());
    let mut sink = FileCommandSink::new(config.output_file.clone(), config.summary_file.clone());

    let mut orchestrator = Orchestrator::new(config, Box::new(registry));
    let outcome = orchestrator.run_and_publish(cancel, &mut sink).await?;

    tracing::debug!(updates = outcome.report.total_updates(), "outputs published");
    Ok(())
}
