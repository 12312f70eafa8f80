//! Startup banner for `blitz serve`.
//!
//! Lists every route and the first 32 characters of the seed token.

use console::style;

use blitz_core::digest;

use crate::http::router::ENDPOINTS;

/// Seed prefix length shown in the banner.
const SEED_PREVIEW_LEN: usize = 32;

fn seed_preview() -> &'static str {
    &digest::seed()[..SEED_PREVIEW_LEN]
}

/// Banner contents as JSON (used with `--json`).
pub fn banner_json(addr: &str) -> serde_json::Value {
    let endpoints: Vec<serde_json::Value> = ENDPOINTS
        .iter()
        .map(|(method, path, description)| {
            serde_json::json!({
                "method": method,
                "path": path,
                "description": description,
            })
        })
        .collect();

    serde_json::json!({
        "listening": format!("http://{addr}"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoints,
        "goldendag": digest::seed(),
    })
}

/// Print the startup banner.
pub fn print_startup_banner(addr: &str) {
    println!();
    println!(
        "  {} Blitz v{} listening on {}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION"),
        style(format!("http://{addr}")).cyan()
    );
    println!();
    println!("  {}", style("── Endpoints ──").dim());
    for (method, path, description) in ENDPOINTS {
        println!(
            "  {:<5} {:<16} {}",
            style(method).bold(),
            style(path).cyan(),
            style(description).dim()
        );
    }
    println!();
    println!(
        "  {}  {}...",
        style("GoldenDAG:").bold(),
        style(seed_preview()).yellow()
    );
    println!("  {}", style("Press Ctrl+C to stop").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_preview_is_prefix_of_seed() {
        assert_eq!(seed_preview().len(), SEED_PREVIEW_LEN);
        assert!(digest::seed().starts_with(seed_preview()));
    }

    #[test]
    fn banner_json_lists_every_endpoint() {
        let banner = banner_json("0.0.0.0:7777");
        assert_eq!(banner["listening"], "http://0.0.0.0:7777");
        assert_eq!(banner["endpoints"].as_array().unwrap().len(), ENDPOINTS.len());
        assert_eq!(banner["goldendag"], digest::seed());
    }
}
