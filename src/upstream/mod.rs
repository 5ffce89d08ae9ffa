use crate::config::UpstreamConfig;
use crate::error::{ProxyError, Result};
use reqwest::header::{ACCEPT, REFERER};
use serde_json::Value;
use tracing::{debug, warn};

/// Client for the third-party location search API.
///
/// Holds one pooled `reqwest::Client`; cloning is cheap and shares the pool.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProxyError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Build the search URL for a destination.
    ///
    /// Parameter order is fixed (`key`, `searchQuery`, `language`) and every
    /// value is percent-encoded, so `New York` becomes `New%20York`.
    pub fn search_url(&self, destination: &str) -> String {
        format!(
            "{}?key={}&searchQuery={}&language={}",
            self.config.base_url,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(destination),
            urlencoding::encode(&self.config.language),
        )
    }

    /// Run one location search and return the upstream JSON untouched.
    ///
    /// Exactly one request is sent. Network failures, non-2xx statuses and
    /// bodies that are not JSON are all returned as errors.
    pub async fn search(&self, destination: &str) -> Result<Value> {
        debug!(destination = %destination, "Searching upstream locations");

        let response = self
            .http
            .get(self.search_url(destination))
            .header(ACCEPT, "application/json")
            .header(REFERER, &self.config.referer)
            .send()
            .await
            .map_err(|e| {
                // Strip the URL: it carries the API key.
                let e = e.without_url();
                warn!(destination = %destination, error = %e, "Upstream request failed");
                ProxyError::Upstream(e)
            })?;

        let status = response.status();
        debug!(destination = %destination, status = %status, "Upstream responded");

        if !status.is_success() {
            warn!(destination = %destination, status = %status, "Upstream returned an error status");
            return Err(ProxyError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Upstream(e.without_url()))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(destination = %destination, error = %e, "Upstream body is not valid JSON");
            ProxyError::UpstreamBody(e)
        })
    }
}
