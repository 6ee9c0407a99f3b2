//! Cross-origin policy wrapper.
//!
//! Applied around the whole dispatch surface. Preflight (`OPTIONS`) requests
//! are answered here and never reach routing; every other response gets the
//! policy headers stamped on it, whatever produced it.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::config::schema::CorsConfig;
use crate::config::validation::ValidationError;

/// Process-wide cross-origin policy with pre-rendered header values.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
}

impl CorsPolicy {
    pub fn from_config(config: &CorsConfig) -> Result<Self, ValidationError> {
        let value = |field: &'static str, raw: String| {
            HeaderValue::from_str(&raw)
                .map_err(|_| ValidationError::InvalidCors { field, value: raw })
        };

        Ok(Self {
            allow_origin: value("allow_origin", config.allow_origin.clone())?,
            allow_methods: value("allow_methods", config.allow_methods.join(", "))?,
            allow_headers: value("allow_headers", config.allow_headers.join(", "))?,
        })
    }

    /// Overwrite the three policy headers in `headers`.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static("*"),
            allow_methods: HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
            allow_headers: HeaderValue::from_static("Content-Type, Authorization"),
        }
    }
}

/// Middleware enforcing the policy. Use with `from_fn_with_state`.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        (StatusCode::OK, Body::empty()).into_response()
    } else {
        next.run(request).await
    };

    policy.apply(response.headers_mut());
    response
}
