//! SSDP discovery module.
//!
//! Provides search transmission, response collection, and header parsing.

pub mod collector;
pub mod headers;
pub mod search;

pub use collector::{collect, CollectorOptions};
pub use headers::parse_headers;
pub use search::send_search;
