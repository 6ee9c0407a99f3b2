//! Compiled route definitions.

use std::str::FromStr;

use axum::http::uri::{Authority, Scheme};
use url::Url;

use crate::config::schema::RouteConfig;
use crate::config::validation::ValidationError;
use crate::routing::matcher::PathPrefixMatcher;
use crate::routing::rewrite::{rewrite_path, upstream_root};

/// A public prefix bound to one upstream.
///
/// Built once at startup; the upstream URL is parsed and its authority and
/// path root precomputed so nothing is re-parsed per request.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    matcher: PathPrefixMatcher,
    upstream_url: Url,
    upstream_path_prefix: String,
    upstream_root: String,
    scheme: Scheme,
    authority: Authority,
}

impl RouteDefinition {
    pub fn new(
        public_prefix: &str,
        upstream_url: &str,
        upstream_path_prefix: &str,
    ) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidUpstreamUrl {
            prefix: public_prefix.to_string(),
            url: upstream_url.to_string(),
            reason,
        };

        let url = Url::parse(upstream_url).map_err(|e| invalid(e.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| invalid("missing host".to_string()))?;
        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let authority = Authority::from_str(&authority).map_err(|e| invalid(e.to_string()))?;
        let scheme = Scheme::from_str(url.scheme()).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            matcher: PathPrefixMatcher::new(public_prefix),
            upstream_root: upstream_root(url.path(), upstream_path_prefix),
            upstream_path_prefix: upstream_path_prefix.to_string(),
            upstream_url: url,
            scheme,
            authority,
        })
    }

    pub fn from_config(config: &RouteConfig) -> Result<Self, ValidationError> {
        Self::new(
            &config.public_prefix,
            &config.upstream_url,
            &config.upstream_path_prefix,
        )
    }

    pub fn public_prefix(&self) -> &str {
        self.matcher.prefix()
    }

    pub fn upstream_url(&self) -> &Url {
        &self.upstream_url
    }

    pub fn upstream_path_prefix(&self) -> &str {
        &self.upstream_path_prefix
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// `host[:port]` of the upstream, also used as the outbound `Host` header.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }

    /// Path the upstream should see for a request to `path`.
    pub fn rewrite(&self, path: &str) -> String {
        rewrite_path(path, self.public_prefix(), &self.upstream_root)
    }
}
