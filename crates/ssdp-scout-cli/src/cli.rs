//! CLI argument definitions using clap.

use clap::Parser;

/// Discover devices on the local network using SSDP
#[derive(Parser, Debug)]
#[command(name = "ssdp-scout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The SSDP search target (ST) to use
    #[arg(short = 's', long, default_value = "upnp:rootdevice")]
    pub search_target: String,

    /// MX header value: maximum seconds responders may delay their reply
    #[arg(long, default_value = "2")]
    pub mx: u8,

    /// Maximum wait time (in seconds) for responses
    #[arg(short = 'w', long, default_value = "2")]
    pub max_wait: u64,

    /// Timeout (in seconds) for socket receive operations
    #[arg(short, long, default_value = "5.0")]
    pub timeout: f64,

    /// Number of times the discovery message is sent
    #[arg(short, long, default_value = "3")]
    pub retries: u32,

    /// Skip fetching device descriptions from LOCATION URLs
    #[arg(long)]
    pub no_fetch: bool,

    /// Keep listening until the wait window ends instead of stopping on
    /// the first receive timeout
    #[arg(long)]
    pub keep_listening: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (debug logging, fetched descriptions)
    #[arg(short, long)]
    pub verbose: bool,
}
