//! Error types for SSDP Scout core.

use thiserror::Error;

/// Core error type for discovery operations.
///
/// Only `InvalidRequest` and `Transmit` abort a session. Receive-side socket
/// errors are absorbed by the collector (it returns whatever was gathered),
/// and fetch errors are downgraded to an "Unavailable" description marker.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Invalid search request: {0}")]
    InvalidRequest(String),

    #[error("Failed to send search: {0}")]
    Transmit(#[source] std::io::Error),

    #[error("Description fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Description fetch failed: HTTP {status}")]
    FetchStatus { status: reqwest::StatusCode },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
