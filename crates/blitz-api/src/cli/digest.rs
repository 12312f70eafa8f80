//! Digest commands: digest, seed, validate, nbhs.

use anyhow::Result;
use console::style;

use blitz_core::digest;
use blitz_core::nbhs::nbhs_1024;

/// Print `generate(input)`.
pub fn print_digest(input: &str, json: bool) -> Result<()> {
    let token = digest::generate(input);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "input": input,
                "goldendag": token,
            }))?
        );
    } else {
        println!("{token}");
    }
    Ok(())
}

/// Print the seed token.
pub fn print_seed(json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "origin": digest::ORIGIN_SIGNATURE,
                "seed": digest::seed(),
            }))?
        );
    } else {
        println!("{}", digest::seed());
    }
    Ok(())
}

/// Report whether `token` is well formed. Returns the verdict so the caller
/// can set the exit status.
pub fn check_token(token: &str, json: bool) -> Result<bool> {
    let valid = digest::validate(token);
    if json {
        println!(
            "{}",
            serde_json::json!({"token": token, "valid": valid})
        );
    } else if valid {
        println!("  {} valid GoldenDAG token", style("✓").green().bold());
    } else {
        println!(
            "  {} not a GoldenDAG token (expected {} hex characters, got {} characters)",
            style("✗").red().bold(),
            digest::DIGEST_HEX_LEN,
            token.chars().count()
        );
    }
    Ok(valid)
}

/// Print the NBHS-1024 fingerprint of `input`.
pub fn print_nbhs(input: &str, json: bool) -> Result<()> {
    let token = nbhs_1024(input.as_bytes());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "input": input,
                "nbhs_1024": token,
            }))?
        );
    } else {
        println!("{token}");
    }
    Ok(())
}
