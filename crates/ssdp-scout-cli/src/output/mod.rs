//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use ssdp_scout_core::DiscoveredDevice;

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the discovered device list
    fn format_devices(&self, devices: &[DiscoveredDevice]) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
