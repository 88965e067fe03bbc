//! SSDP Scout - discover devices on the local network using SSDP.
//!
//! Sends an `M-SEARCH` multicast query, collects responses for a bounded
//! window, and optionally fetches each responder's description document.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;

use cli::Cli;
use error::exit_codes;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = tokio::select! {
        result = commands::run_discover(cli) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted by user. Exiting...");
            Ok(())
        }
    };

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Set up logging. The subscriber installed here is the only log sink; the
/// core library emits tracing events but never configures one itself.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
