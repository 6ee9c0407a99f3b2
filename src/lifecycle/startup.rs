//! Startup orchestration.
//!
//! # Responsibilities
//! - Compile the validated configuration into a server
//! - Start the optional metrics exporter
//! - Bind the listener last, so traffic only arrives when everything is ready

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::http::GatewayServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Start the gateway and serve until `shutdown` fires.
pub async fn start(
    config: GatewayConfig,
    shutdown: &Shutdown,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(port = config.listener.port, "Silence Manager gateway starting");
    tracing::info!(upstream = %config.upstreams.prometheus_url, "Proxying Prometheus requests");
    tracing::info!(upstream = %config.upstreams.alertmanager_url, "Proxying Alertmanager requests");
    tracing::info!(labels = %config.frontend.label_selector, "Using label selector");
    for route in &config.routes {
        tracing::info!(
            prefix = %route.public_prefix,
            upstream = %route.upstream_url,
            "Proxying extra route"
        );
    }

    let server = GatewayServer::new(config)?;

    if let Some(addr) = &server.config().observability.metrics_address {
        let addr: SocketAddr = addr.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(server.config().listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
