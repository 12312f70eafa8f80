//! `blitz serve` - start the REST API server.

use std::path::Path;

use anyhow::{Context, Result};

use blitz_infra::config::resolve_server_config;
use blitz_types::config::ServerConfig;

use crate::cli::banner;
use crate::http::router::build_router;
use crate::state::AppState;

/// Resolve configuration, print the banner and serve until Ctrl+C/SIGTERM.
///
/// Precedence: CLI flags, then environment, then the config file, then
/// defaults.
pub async fn serve(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
    quiet: bool,
    json: bool,
) -> Result<()> {
    let config = apply_cli_overrides(resolve_server_config(config_path).await, host, port);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, seed = %blitz_core::digest::seed(), "server starting");

    if json {
        println!("{}", banner::banner_json(&addr));
    } else if !quiet {
        banner::print_startup_banner(&addr);
    }

    let router = build_router(AppState::new());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet && !json {
        println!("\n  Server stopped.");
    }
    tracing::info!("server stopped");

    Ok(())
}

fn apply_cli_overrides(
    mut config: ServerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> ServerConfig {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let config = apply_cli_overrides(
            ServerConfig::default(),
            Some("127.0.0.1".to_string()),
            Some(9000),
        );
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn absent_flags_keep_config() {
        let base = ServerConfig {
            host: "::".to_string(),
            port: 8080,
        };
        assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
    }
}
