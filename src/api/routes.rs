use crate::api::handlers::ApiState;
use axum::{Router, routing::get};

pub fn health_routes() -> Router<ApiState> {
    Router::new()
        .route("/health", get(super::handlers::health_check))
        .route("/info", get(super::handlers::server_info))
}

pub fn location_routes() -> Router<ApiState> {
    Router::new().route(
        "/api/GetLocations/{destination}",
        get(super::handlers::get_locations),
    )
}
