//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Matched (request, RouteDefinition)
//!     → dispatcher.rs (rewrite path + Host, stream body upstream)
//!     → pooled hyper client
//!     → upstream response streamed back verbatim
//!     → error.rs (connection failure → 502, deadline → 504)
//! ```
//!
//! # Design Decisions
//! - Transparent pass-through: status, headers and body are never altered
//! - Bodies are streamed in both directions, never buffered
//! - One client for all routes; connections pooled per upstream authority
//! - A dropped caller drops the upstream future and frees its connection

pub mod dispatcher;
pub mod error;

pub use dispatcher::{build_upstream_request, Dispatcher};
pub use error::ProxyError;
