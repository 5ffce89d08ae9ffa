pub mod types;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use std::path::Path;
pub use types::*;

/// Prefix for environment overrides, e.g. `LOCATION_PROXY__UPSTREAM__API_KEY`
pub const ENV_PREFIX: &str = "LOCATION_PROXY";

/// Load configuration from an optional TOML file layered under environment variables
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to load config from: {}", path.display()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate the loaded configuration
fn validate_config(config: &AppConfig) -> Result<()> {
    if config.upstream.api_key.trim().is_empty() {
        anyhow::bail!(
            "Missing upstream API key. Set upstream.api_key or {}__UPSTREAM__API_KEY",
            ENV_PREFIX
        );
    }

    let url = reqwest::Url::parse(&config.upstream.base_url).with_context(|| {
        format!(
            "Invalid upstream base URL '{}'",
            config.upstream.base_url
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!(
            "Upstream base URL '{}' must use http or https",
            config.upstream.base_url
        );
    }

    // Validate log level
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.as_str()) {
        anyhow::bail!(
            "Invalid log level '{}'. Valid levels: {}",
            config.logging.level,
            valid_levels.join(", ")
        );
    }

    // Validate log format
    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.logging.format.as_str()) {
        anyhow::bail!(
            "Invalid log format '{}'. Valid formats: {}",
            config.logging.format,
            valid_formats.join(", ")
        );
    }

    Ok(())
}
