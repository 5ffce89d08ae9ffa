use axum::Router;
use location_proxy::{
    api::{self, handlers::ApiState},
    config::{AppConfig, HttpConfig, UpstreamConfig},
    upstream::UpstreamClient,
};

pub const SEARCH_PATH: &str = "/api/v1/location/search";
pub const TEST_API_KEY: &str = "integration-key";

/// Config pointing the upstream at a local mock server.
pub fn create_config(base_url: String) -> AppConfig {
    AppConfig {
        http: HttpConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        logging: Default::default(),
        upstream: UpstreamConfig {
            base_url,
            api_key: TEST_API_KEY.to_string(),
            ..Default::default()
        },
    }
}

/// Config whose upstream refuses connections.
pub fn create_unreachable_config() -> AppConfig {
    create_config("http://127.0.0.1:1/api/v1/location/search".to_string())
}

/// Build a test Router from the given config (no HTTP server, uses tower::oneshot).
pub fn build_test_app(config: &AppConfig) -> Router {
    let upstream = UpstreamClient::new(config.upstream.clone()).unwrap();
    api::build_router(ApiState::new(upstream))
}

/// Helper to extract the raw response body as text.
pub async fn response_text(response: axum::http::Response<axum::body::Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Helper to extract JSON from a response body.
pub async fn response_json(response: axum::http::Response<axum::body::Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
