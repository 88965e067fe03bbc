//! Core library for SSDP device discovery.
//!
//! Implements the discovery session: sending the `M-SEARCH` multicast query,
//! draining responses within a bounded window, parsing them into structured
//! records, and optionally fetching each responder's description document.

pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::collector::{collect, CollectorOptions};
pub use discovery::search::{send_search, SSDP_ADDR, SSDP_PORT};
pub use error::DiscoveryError;
pub use types::{DiscoveredDevice, ParsedHeaders, SearchRequest};
