//! Per-route forwarding to upstreams.
//!
//! # Responsibilities
//! - Rewrite the request target onto the upstream's native path scheme
//! - Replace the Host header with the upstream authority
//! - Forward over a pooled client and stream the response back
//! - Map transport failures to gateway status codes

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, Response, Uri, Version};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::proxy::error::ProxyError;
use crate::resilience::with_timeout;
use crate::routing::RouteDefinition;

/// Forwards matched requests to their upstream.
#[derive(Clone)]
pub struct Dispatcher {
    client: Client<HttpConnector, Body>,
    timeout: Option<Duration>,
}

impl Dispatcher {
    /// Create a dispatcher with its own connection pool.
    pub fn new(timeout: Option<Duration>) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, timeout }
    }

    /// Forward `request` to the upstream of `route`.
    ///
    /// The upstream response is returned untouched: status, headers and a
    /// streaming body. Nothing is retried.
    pub async fn forward(
        &self,
        request: Request<Body>,
        route: &RouteDefinition,
    ) -> Result<Response<Body>, ProxyError> {
        let request = build_upstream_request(request, route)?;

        tracing::debug!(
            route = %route.public_prefix(),
            method = %request.method(),
            upstream = %request.uri(),
            "Proxying request"
        );

        let response: Response<hyper::body::Incoming> =
            with_timeout(self.timeout, self.client.request(request))
                .await
                .map_err(|_| ProxyError::UpstreamTimeout)??;

        let (parts, body) = response.into_parts();
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}

/// Turn an inbound request into the request sent upstream.
///
/// Only the target URI and the `Host` header change; method, remaining
/// headers, extensions and the body stream move across as they are.
pub fn build_upstream_request(
    request: Request<Body>,
    route: &RouteDefinition,
) -> Result<Request<Body>, ProxyError> {
    let (mut parts, body) = request.into_parts();

    let path = route.rewrite(parts.uri.path());
    let path_and_query = match parts.uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };

    parts.uri = Uri::builder()
        .scheme(route.scheme().clone())
        .authority(route.authority().clone())
        .path_and_query(path_and_query)
        .build()?;

    let host = HeaderValue::from_str(route.authority().as_str()).map_err(axum::http::Error::from)?;
    parts.headers.insert(header::HOST, host);

    // The pooled client speaks HTTP/1.1 to upstreams whatever the caller used.
    parts.version = Version::HTTP_11;

    Ok(Request::from_parts(parts, body))
}
