//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → cli.rs (flags and environment variables layered on top)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → compiled into RouteTable + CorsPolicy, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Precedence: flag > environment variable > config file > default
//! - Config is read once at startup and never changes afterwards
//! - Any validation failure is fatal; the listener is never bound

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    CorsConfig, FrontendConfig, GatewayConfig, ListenerConfig, ObservabilityConfig,
    RouteConfig, UpstreamsConfig,
};
pub use validation::{validate_config, ValidationError};
