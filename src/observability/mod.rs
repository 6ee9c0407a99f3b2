//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms via the `metrics` facade)
//!
//! Consumers:
//!     → stdout (fmt subscriber, filtered by RUST_LOG or log_level)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - A request span carries a generated request id; it is never forwarded
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
