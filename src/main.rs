//! Student-status management client
//!
//! Terminal front end that wires configuration, the persisted session, the
//! request pipeline, and the route guard together and runs one command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use sms_core::config::{ClientConfig, LoggingConfig};

mod commands;
mod confirm;
mod context;
mod output;
mod terminal;

use commands::Cli;
use context::ClientContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::load(&cli.config, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::debug!(config = %cli.config, env = %cli.env, "Configuration loaded");

    let ctx = match ClientContext::build(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            output::print_error(&e.message);
            std::process::exit(1);
        }
    };

    if let Err(e) = cli.execute(&ctx).await {
        tracing::error!(kind = %e.kind, "Command failed: {}", e.message);
        if e.is_authentication() {
            ctx.settle().await;
        } else {
            output::print_error(&e.message);
        }
        std::process::exit(1);
    }

    ctx.settle().await;
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
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
