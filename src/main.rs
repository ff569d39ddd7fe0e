//! authz-inspect — validate Connect access tokens and explain the
//! resulting authorization decision.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use connect_core::config::AppConfig;

mod cli;
mod output;
mod report;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);

    match cli.execute(&config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("authz-inspect failed: {}", e);
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing/logging on stderr so reports stay machine-readable
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
