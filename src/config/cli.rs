//! Command-line flags and environment variables.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::GatewayConfig;
use crate::config::validation::validate_config;

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "silence-gateway")]
#[command(about = "Single-origin gateway for the silence manager UI", long_about = None)]
pub struct Cli {
    /// Optional TOML config file
    #[arg(long, env = "GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port to run the server on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Interface to bind
    #[arg(long, env = "BIND_HOST")]
    pub bind_host: Option<String>,

    /// Prometheus URL
    #[arg(long, env = "PROMETHEUS_URL")]
    pub prometheus_url: Option<String>,

    /// Alertmanager URL
    #[arg(long, env = "ALERTMANAGER_URL")]
    pub alertmanager_url: Option<String>,

    /// Comma-separated list of Prometheus labels to select from
    #[arg(long, env = "LABEL_SELECTOR")]
    pub label_selector: Option<String>,

    /// Serve the UI from this directory instead of the embedded bundle
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Upstream request timeout in seconds (disabled when unset)
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    /// Bind address of the Prometheus metrics exporter (disabled when unset)
    #[arg(long, env = "METRICS_ADDRESS")]
    pub metrics_address: Option<String>,
}

impl Cli {
    /// Build the effective configuration: file (if any), then flags and
    /// environment on top, then validation.
    pub fn resolve(&self) -> Result<GatewayConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => GatewayConfig::default(),
        };
        let config = self.apply(base);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Overlay every flag that was given onto `config`.
    pub fn apply(&self, mut config: GatewayConfig) -> GatewayConfig {
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(host) = &self.bind_host {
            config.listener.bind_host = host.clone();
        }
        if let Some(url) = &self.prometheus_url {
            config.upstreams.prometheus_url = url.clone();
        }
        if let Some(url) = &self.alertmanager_url {
            config.upstreams.alertmanager_url = url.clone();
        }
        if let Some(labels) = &self.label_selector {
            config.frontend.label_selector = labels.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.frontend.static_dir = Some(dir.clone());
        }
        if let Some(secs) = self.upstream_timeout_secs {
            config.upstreams.timeout_secs = Some(secs);
        }
        if let Some(addr) = &self.metrics_address {
            config.observability.metrics_address = Some(addr.clone());
        }
        config
    }
}
