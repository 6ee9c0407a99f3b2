//! `GET /api/config`: startup values the frontend needs.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::config::schema::GatewayConfig;
use crate::http::server::AppState;

/// Body of the config endpoint. Fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigPayload {
    pub labels: String,
    pub alertmanager_url: String,
}

impl ConfigPayload {
    /// Exact strings supplied at startup, without URL normalisation.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            labels: config.frontend.label_selector.clone(),
            alertmanager_url: config.upstreams.alertmanager_url.clone(),
        }
    }
}

pub async fn config_handler(State(state): State<AppState>) -> Json<ConfigPayload> {
    Json(state.payload.as_ref().clone())
}
