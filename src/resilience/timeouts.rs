//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap upstream calls with an optional deadline
//! - Cancel the in-flight call cleanly when the deadline passes
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Opt-in: no deadline unless one is configured
//! - The deadline covers the wait for response headers, not body streaming
//! - Timed-out requests return 504 Gateway Timeout

use std::future::Future;
use std::time::Duration;

use tokio::time::error::Elapsed;

/// Await `fut`, bounded by `limit` when one is set.
pub async fn with_timeout<F>(limit: Option<Duration>, fut: F) -> Result<F::Output, Elapsed>
where
    F: Future,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut).await,
        None => Ok(fut.await),
    }
}
