//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Upstream URLs must be absolute `http` URLs with a host
//! - Route prefixes must be well-formed and unique
//! - CORS values must be usable as header values
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use url::Url;

use crate::config::schema::{GatewayConfig, CONFIG_ENDPOINT};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("route prefix {prefix:?}: {reason}")]
    InvalidPrefix { prefix: String, reason: &'static str },

    #[error("route prefix {0:?} is defined more than once")]
    DuplicatePrefix(String),

    #[error("upstream path prefix {0:?} must be empty or start with '/'")]
    InvalidUpstreamPathPrefix(String),

    #[error("upstream URL {url:?} for {prefix}: {reason}")]
    InvalidUpstreamUrl {
        prefix: String,
        url: String,
        reason: String,
    },

    #[error("invalid CORS {field}: {value:?}")]
    InvalidCors { field: &'static str, value: String },

    #[error("upstream timeout must be greater than zero")]
    ZeroTimeout,

    #[error("static directory {0:?} does not exist")]
    MissingStaticDir(String),

    #[error("invalid metrics address {0:?}")]
    InvalidMetricsAddress(String),
}

/// Validate a fully resolved configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for route in config.route_configs() {
        if let Some(reason) = prefix_problem(&route.public_prefix) {
            errors.push(ValidationError::InvalidPrefix {
                prefix: route.public_prefix.clone(),
                reason,
            });
        } else if !seen.insert(route.public_prefix.clone()) {
            errors.push(ValidationError::DuplicatePrefix(route.public_prefix.clone()));
        }

        if !route.upstream_path_prefix.is_empty() && !route.upstream_path_prefix.starts_with('/') {
            errors.push(ValidationError::InvalidUpstreamPathPrefix(
                route.upstream_path_prefix.clone(),
            ));
        }

        if let Err(reason) = check_upstream_url(&route.upstream_url) {
            errors.push(ValidationError::InvalidUpstreamUrl {
                prefix: route.public_prefix.clone(),
                url: route.upstream_url.clone(),
                reason,
            });
        }
    }

    let cors = &config.cors;
    if HeaderValue::from_str(&cors.allow_origin).is_err() || cors.allow_origin.is_empty() {
        errors.push(ValidationError::InvalidCors {
            field: "allow_origin",
            value: cors.allow_origin.clone(),
        });
    }
    for method in &cors.allow_methods {
        if Method::from_bytes(method.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidCors {
                field: "allow_methods",
                value: method.clone(),
            });
        }
    }
    for header in &cors.allow_headers {
        if axum::http::HeaderName::from_bytes(header.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidCors {
                field: "allow_headers",
                value: header.clone(),
            });
        }
    }

    if config.upstreams.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if let Some(dir) = &config.frontend.static_dir {
        if !dir.is_dir() {
            errors.push(ValidationError::MissingStaticDir(dir.display().to_string()));
        }
    }

    if let Some(addr) = &config.observability.metrics_address {
        if addr.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidMetricsAddress(addr.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn prefix_problem(prefix: &str) -> Option<&'static str> {
    if prefix.is_empty() {
        Some("must not be empty")
    } else if !prefix.starts_with('/') {
        Some("must start with '/'")
    } else if prefix.ends_with('/') {
        Some("must not end with '/'")
    } else if prefix == CONFIG_ENDPOINT {
        Some("is reserved for the config endpoint")
    } else {
        None
    }
}

fn check_upstream_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if url.scheme() != "http" {
        return Err(format!("unsupported scheme {:?}", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}
