//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up the matching route for a request path
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) prefix scan (acceptable for a handful of routes)
//! - Longest matching prefix wins, independent of declaration order

use crate::config::schema::RouteConfig;
use crate::config::validation::ValidationError;
use crate::routing::route::RouteDefinition;

/// Ordered collection of proxy routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Compile route configs, failing on the first malformed upstream or
    /// repeated prefix.
    pub fn from_config(configs: &[RouteConfig]) -> Result<Self, ValidationError> {
        let mut table = Self::default();
        for config in configs {
            table.push(RouteDefinition::from_config(config)?)?;
        }
        Ok(table)
    }

    pub fn push(&mut self, route: RouteDefinition) -> Result<(), ValidationError> {
        if self
            .routes
            .iter()
            .any(|r| r.public_prefix() == route.public_prefix())
        {
            return Err(ValidationError::DuplicatePrefix(
                route.public_prefix().to_string(),
            ));
        }
        self.routes.push(route);
        Ok(())
    }

    /// Find the route whose prefix is the longest match for `path`.
    pub fn match_path(&self, path: &str) -> Option<&RouteDefinition> {
        self.routes
            .iter()
            .filter(|r| r.matches(path))
            .max_by_key(|r| r.public_prefix().len())
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }
}
