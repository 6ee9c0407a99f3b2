//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace span with request id)
//!     → cors.rs (preflight answered here; headers stamped on everything else)
//!     → /api/config → config_endpoint.rs
//!     → otherwise routing::RouteTable
//!         → match: proxy::Dispatcher
//!         → no match: assets.rs
//! ```

pub mod assets;
pub mod config_endpoint;
pub mod cors;
pub mod server;

pub use cors::CorsPolicy;
pub use server::{AppState, GatewayServer};
