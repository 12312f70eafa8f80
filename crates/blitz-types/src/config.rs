//! Server configuration types for Blitz.
//!
//! `ServerConfig` represents the optional `blitz.toml` that controls the
//! listen address. All fields have sensible defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the `blitz serve` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7777
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7777);
        assert_eq!(config.bind_addr(), "0.0.0.0:7777");
    }

    #[test]
    fn test_server_config_deserialize_with_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_server_config_deserialize_with_values() {
        let toml_str = r#"
host = "127.0.0.1"
port = 8080
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_server_config_partial_override() {
        let config: ServerConfig = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
    }
}
