//! Silence Manager gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────────┐
//!                         │                     GATEWAY                      │
//!    Browser request      │  ┌────────┐   ┌────────┐   ┌─────────────────┐   │
//!   ──────────────────────┼─▶│ trace  │──▶│  cors  │──▶│  axum router    │   │
//!                         │  └────────┘   └───┬────┘   └──┬─────┬─────┬──┘   │
//!                         │        OPTIONS ◀──┘           │     │     │      │
//!                         │                   /api/config │     │     │      │
//!                         │                 ┌─────────────┘     │     │      │
//!                         │                 ▼                   ▼     ▼      │
//!                         │          ┌────────────┐  ┌──────────┐ ┌───────┐  │
//!                         │          │  config    │  │  route   │ │static │  │
//!                         │          │  payload   │  │  table   │ │assets │  │
//!                         │          └────────────┘  └────┬─────┘ └───────┘  │
//!                         │                               ▼                  │
//!                         │                        ┌────────────┐            │    Prometheus
//!                         │                        │ dispatcher │────────────┼──▶ /api/v1/*
//!                         │                        │ (rewrite)  │────────────┼──▶ /api/v2/*
//!                         │                        └────────────┘            │    Alertmanager
//!                         └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;

use silence_gateway::config::Cli;
use silence_gateway::lifecycle::{signals::shutdown_signal, startup, Shutdown};
use silence_gateway::observability::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let resolved = cli.resolve();

    let level = resolved
        .as_ref()
        .map(|c| c.observability.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&level);

    let config = match resolved {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        trigger.trigger();
    });

    startup::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
