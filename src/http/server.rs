//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, CORS)
//! - Bind server to listener
//! - Dispatch requests to the route table, falling through to static assets

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::schema::{GatewayConfig, CONFIG_ENDPOINT};
use crate::config::ConfigError;
use crate::http::assets::StaticAssets;
use crate::http::config_endpoint::{config_handler, ConfigPayload};
use crate::http::cors::{cors_middleware, CorsPolicy};
use crate::observability::metrics;
use crate::proxy::Dispatcher;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub dispatcher: Dispatcher,
    pub payload: Arc<ConfigPayload>,
    pub assets: StaticAssets,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Compile routes and policy from a validated configuration.
    ///
    /// Fails if an upstream URL does not parse, so a bad target is caught
    /// before the listener accepts anything.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let routes = RouteTable::from_config(&config.route_configs())
            .map_err(|e| ConfigError::Validation(vec![e]))?;
        let cors =
            CorsPolicy::from_config(&config.cors).map_err(|e| ConfigError::Validation(vec![e]))?;

        for route in routes.routes() {
            tracing::debug!(
                prefix = %route.public_prefix(),
                upstream = %route.upstream_url(),
                native_prefix = %route.upstream_path_prefix(),
                "Route compiled"
            );
        }

        let state = AppState {
            routes: Arc::new(routes),
            dispatcher: Dispatcher::new(config.upstreams.timeout_secs.map(Duration::from_secs)),
            payload: Arc::new(ConfigPayload::from_config(&config)),
            assets: StaticAssets::new(config.frontend.static_dir.as_deref()),
        };

        let router = Self::build_router(state, cors);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState, cors: CorsPolicy) -> Router {
        Router::new()
            .route(CONFIG_ENDPOINT, get(config_handler))
            .fallback(dispatch)
            .with_state(state)
            .layer(middleware::from_fn_with_state(
                Arc::new(cors),
                cors_middleware,
            ))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    id = %uuid::Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri()
                )
            }))
    }

    /// The complete dispatch surface, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight
    /// requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fallback handler: proxy when a route matches, static assets otherwise.
async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let Some(route) = state.routes.match_path(request.uri().path()) else {
        return state.assets.serve(request).await;
    };

    let start_time = Instant::now();
    let method = request.method().to_string();

    let response = match state.dispatcher.forward(request, route).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(route = %route.public_prefix(), error = %e, "Upstream error");
            e.into_response()
        }
    };

    metrics::record_request(
        &method,
        response.status().as_u16(),
        route.public_prefix(),
        start_time,
    );
    response
}
