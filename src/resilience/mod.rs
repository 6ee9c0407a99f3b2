//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to upstream:
//!     → timeouts.rs (optional deadline on the upstream call)
//!     → On failure: surfaced once as a gateway error, never retried
//! ```
//!
//! # Design Decisions
//! - Forward once, fail once: retries are left to the client
//! - Deadlines are opt-in so the default behaviour has no timeout

pub mod timeouts;

pub use timeouts::with_timeout;
