//! Error types for the SSDP Scout CLI.
//!
//! CliError wraps DiscoveryError from the core library and adds
//! CLI-specific variants.

use ssdp_scout_core::DiscoveryError;
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Discovery(_) => exit_codes::FAILURE,
            CliError::InvalidArgument(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
