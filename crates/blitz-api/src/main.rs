//! Blitz CLI and REST API entry point.
//!
//! Binary name: `blitz`
//!
//! Parses CLI arguments, sets up tracing, then dispatches to a digest command
//! or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use blitz_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    init_tracing(verbosity_filter(cli.verbose, cli.quiet), otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve {
            port,
            host,
            config,
            ..
        } => {
            cli::serve::serve(&config, host, port, cli.quiet, cli.json).await?;
        }

        Commands::Digest { input } => {
            cli::digest::print_digest(&input, cli.json)?;
        }

        Commands::Seed => {
            cli::digest::print_seed(cli.json)?;
        }

        Commands::Validate { token } => {
            if !cli::digest::check_token(&token, cli.json)? {
                shutdown_tracing();
                std::process::exit(1);
            }
        }

        Commands::Nbhs { input } => {
            cli::digest::print_nbhs(&input, cli.json)?;
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "blitz", &mut std::io::stdout());
        }
    }

    Ok(())
}
