//! Single-origin gateway for the silence manager UI.
//!
//! Serves the UI bundle and a small config document, and reverse-proxies
//! `/api/prometheus/*` and `/api/alertmanager/*` onto the upstream APIs'
//! native path schemes, with one CORS policy over everything.

// Core subsystems
pub mod config;
pub mod http;
pub mod proxy;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::schema::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
