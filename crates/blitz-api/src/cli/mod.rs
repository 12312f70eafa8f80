//! CLI command definitions for the `blitz` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod banner;
pub mod digest;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// GoldenDAG endpoint shim and digest tool.
#[derive(Parser)]
#[command(name = "blitz", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides config file and environment).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config file and environment).
        #[arg(long)]
        host: Option<String>,

        /// Path to the TOML config file.
        #[arg(short, long, env = "BLITZ_CONFIG", default_value = "blitz.toml")]
        config: PathBuf,

        /// Export tracing spans to stdout via OpenTelemetry.
        #[arg(long, env = "BLITZ_OTEL")]
        otel: bool,
    },

    /// Print the GoldenDAG token of a string.
    Digest {
        /// Input string (may be empty).
        input: String,
    },

    /// Print the process-wide seed token.
    Seed,

    /// Check whether a string is a well-formed GoldenDAG token.
    Validate {
        /// Token to check.
        token: String,
    },

    /// Print the NBHS-1024 fingerprint of a string.
    Nbhs {
        /// Input string (may be empty).
        input: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn digest_accepts_empty_input() {
        let cli = Cli::try_parse_from(["blitz", "digest", ""]).unwrap();
        assert!(matches!(cli.command, Commands::Digest { input } if input.is_empty()));
    }

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::try_parse_from(["blitz", "serve", "-p", "9000", "--host", "127.0.0.1"])
            .unwrap();
        match cli.command {
            Commands::Serve { port, host, .. } => {
                assert_eq!(port, Some(9000));
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn global_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["blitz", "seed", "--json"]).unwrap();
        assert!(cli.json);
    }
}
