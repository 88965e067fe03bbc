//! Shared types for the discovery session.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Duration;

use serde::Serialize;

use crate::error::DiscoveryError;

/// Headers parsed from a response datagram.
///
/// Keys are trimmed and uppercased, values trimmed. When a header appears
/// more than once, the last value wins.
pub type ParsedHeaders = HashMap<String, String>;

/// Parameters for one discovery search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// SSDP search target (ST header value)
    pub search_target: String,
    /// MX header value: max seconds responders may randomize their reply over
    pub mx: u8,
    /// How long to collect responses after sending
    pub max_wait: Duration,
    /// Number of times the search datagram is sent
    pub retries: u32,
    /// Per-receive socket timeout
    pub socket_timeout: Duration,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search_target: "upnp:rootdevice".to_string(),
            mx: 2,
            max_wait: Duration::from_secs(2),
            retries: 3,
            socket_timeout: Duration::from_secs(5),
        }
    }
}

impl SearchRequest {
    /// Check that all numeric fields are positive.
    pub fn validate(&self) -> Result<(), DiscoveryError> {
        if self.max_wait.is_zero() {
            return Err(DiscoveryError::InvalidRequest(
                "max wait time must be positive".to_string(),
            ));
        }
        if self.socket_timeout.is_zero() {
            return Err(DiscoveryError::InvalidRequest(
                "socket timeout must be positive".to_string(),
            ));
        }
        if self.retries == 0 {
            return Err(DiscoveryError::InvalidRequest(
                "number of retries must be positive".to_string(),
            ));
        }
        if self.mx == 0 {
            return Err(DiscoveryError::InvalidRequest(
                "MX value must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// One device discovered during a session.
///
/// Created per inbound datagram carrying a LOCATION header, appended to the
/// result in receipt order, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredDevice {
    /// Source address of the response datagram
    pub ip: IpAddr,
    /// Source port of the response datagram
    pub port: u16,
    /// All headers from the response
    pub headers: ParsedHeaders,
    /// LOCATION header value (description document URL)
    pub location: String,
    /// Fetched description body, the "Unavailable" marker on fetch failure,
    /// or `None` when fetching was disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
