use crate::error::ProxyError;
use crate::upstream::UpstreamClient;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct ApiState {
    pub upstream: Arc<UpstreamClient>,
}

impl ApiState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

pub(crate) async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "location-proxy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn server_info() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "authors": env!("CARGO_PKG_AUTHORS"),
    }))
}

/// `GET /api/GetLocations/{destination}`: relay the upstream search result as-is
pub(crate) async fn get_locations(
    State(state): State<ApiState>,
    Path(destination): Path<String>,
) -> Result<Json<Value>, ProxyError> {
    info!(destination = %destination, "Received location search");

    let results = state.upstream.search(&destination).await?;
    Ok(Json(results))
}
