//! Server configuration loader for Blitz.
//!
//! Reads an optional TOML file and deserializes it into [`ServerConfig`].
//! Falls back to defaults when the file is missing or malformed, then applies
//! environment overrides.

use std::path::Path;

use blitz_types::config::ServerConfig;

/// Environment variables consulted by [`apply_env_overrides`].
pub const ENV_HOST: &str = "BLITZ_HOST";
pub const ENV_PORT: &str = "BLITZ_PORT";
/// Generic port variable set by most hosting platforms.
pub const ENV_PORT_FALLBACK: &str = "PORT";

/// Load server configuration from `path`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_server_config(path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServerConfig::default()
        }
    }
}

/// Apply environment overrides read through `lookup`.
///
/// `BLITZ_PORT` wins over `PORT`. Unparseable values are ignored with a
/// warning.
pub fn apply_env_overrides<F>(mut config: ServerConfig, lookup: F) -> ServerConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(ENV_HOST).filter(|h| !h.is_empty()) {
        config.host = host;
    }

    for var in [ENV_PORT_FALLBACK, ENV_PORT] {
        if let Some(raw) = lookup(var) {
            match raw.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => tracing::warn!("Ignoring {var}={raw:?}: {err}"),
            }
        }
    }

    config
}

/// Load from `path` and apply overrides from the process environment.
pub async fn resolve_server_config(path: &Path) -> ServerConfig {
    let config = load_server_config(path).await;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}
