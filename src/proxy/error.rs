//! Forwarding failures and their gateway status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Connect failure, reset, or protocol error talking to the upstream.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] hyper_util::client::legacy::Error),

    /// The opt-in upstream deadline passed before response headers arrived.
    #[error("upstream timed out")]
    UpstreamTimeout,

    #[error("could not build upstream request: {0}")]
    InvalidUpstreamRequest(#[from] axum::http::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::UpstreamUnavailable(_) | ProxyError::InvalidUpstreamRequest(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

/// Gateway failures carry no body: there is no upstream body to pass on.
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
