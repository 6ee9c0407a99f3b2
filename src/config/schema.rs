//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Public prefix of the metrics query API.
pub const PROMETHEUS_PREFIX: &str = "/api/prometheus";

/// Native path scheme of the metrics query API.
pub const PROMETHEUS_UPSTREAM_PREFIX: &str = "/api/v1";

/// Public prefix of the alert-silencing API.
pub const ALERTMANAGER_PREFIX: &str = "/api/alertmanager";

/// Native path scheme of the alert-silencing API.
pub const ALERTMANAGER_UPSTREAM_PREFIX: &str = "/api/v2";

/// Path of the frontend configuration endpoint.
pub const CONFIG_ENDPOINT: &str = "/api/config";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind host, port).
    pub listener: ListenerConfig,

    /// Upstream API locations.
    pub upstreams: UpstreamsConfig,

    /// Values handed to the single-page frontend.
    pub frontend: FrontendConfig,

    /// Cross-origin policy applied to every response.
    pub cors: CorsConfig,

    /// Additional proxy routes, appended after the built-in ones.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GatewayConfig {
    /// The full route table definition: the two built-in API routes followed
    /// by any extra routes from the config file.
    pub fn route_configs(&self) -> Vec<RouteConfig> {
        let mut routes = vec![
            RouteConfig {
                public_prefix: PROMETHEUS_PREFIX.to_string(),
                upstream_url: self.upstreams.prometheus_url.clone(),
                upstream_path_prefix: PROMETHEUS_UPSTREAM_PREFIX.to_string(),
            },
            RouteConfig {
                public_prefix: ALERTMANAGER_PREFIX.to_string(),
                upstream_url: self.upstreams.alertmanager_url.clone(),
                upstream_path_prefix: ALERTMANAGER_UPSTREAM_PREFIX.to_string(),
            },
        ];
        routes.extend(self.routes.iter().cloned());
        routes
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub bind_host: String,

    /// TCP port to listen on.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        if self.bind_host.contains(':') {
            format!("[{}]:{}", self.bind_host, self.port)
        } else {
            format!("{}:{}", self.bind_host, self.port)
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 9193,
        }
    }
}

/// Upstream API locations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpstreamsConfig {
    /// Base URL of the metrics query service.
    pub prometheus_url: String,

    /// Base URL of the alert-silencing service.
    pub alertmanager_url: String,

    /// Optional per-request upstream timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamsConfig {
    fn default() -> Self {
        Self {
            prometheus_url: "http://prometheus.foo.bar".to_string(),
            alertmanager_url: "http://alertmanager.foo.bar".to_string(),
            timeout_secs: None,
        }
    }
}

/// Frontend-facing settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FrontendConfig {
    /// Comma-separated list of metric labels offered by the UI.
    pub label_selector: String,

    /// Serve assets from this directory instead of the embedded bundle.
    pub static_dir: Option<PathBuf>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            label_selector: "instance,job".to_string(),
            static_dir: None,
        }
    }
}

/// Cross-origin policy.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// Value of `Access-Control-Allow-Origin`.
    pub allow_origin: String,

    /// Methods listed in `Access-Control-Allow-Methods`, in order.
    pub allow_methods: Vec<String>,

    /// Headers listed in `Access-Control-Allow-Headers`, in order.
    pub allow_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            allow_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
        }
    }
}

/// A proxy route mapping a public prefix onto an upstream.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RouteConfig {
    /// Path prefix on the gateway (e.g., "/api/prometheus").
    pub public_prefix: String,

    /// Absolute base URL of the upstream.
    pub upstream_url: String,

    /// Upstream's native path prefix substituted for the public one.
    #[serde(default)]
    pub upstream_path_prefix: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Prometheus scrape endpoint bind address. Unset disables the exporter.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_address: None,
        }
    }
}
