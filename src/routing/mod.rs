//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (route lookup, longest prefix wins)
//!     → matcher.rs (segment-aware prefix test)
//!     → Return: matched RouteDefinition or None
//!
//! Matched route:
//!     → rewrite.rs (public path → upstream path, first occurrence only)
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → route.rs (parse upstream URL once, precompute authority + root)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same route
//! - No match is not an error; the caller falls through to static assets

pub mod matcher;
pub mod rewrite;
pub mod route;
pub mod router;

pub use rewrite::rewrite_path;
pub use route::RouteDefinition;
pub use router::RouteTable;
