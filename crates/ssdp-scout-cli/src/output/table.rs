//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, ContentArrangement, Table};

use ssdp_scout_core::DiscoveredDevice;

use super::OutputFormatter;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_devices(&self, devices: &[DiscoveredDevice]) -> String {
        if devices.is_empty() {
            return "No SSDP devices found.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["IP", "Port", "Location", "Server", "ST"]);

        for device in devices {
            let header = |name: &str| device.headers.get(name).map(String::as_str).unwrap_or("-");
            table.add_row(vec![
                Cell::new(device.ip.to_string()),
                Cell::new(device.port.to_string()),
                Cell::new(&device.location),
                Cell::new(header("SERVER")),
                Cell::new(header("ST")),
            ]);
        }

        format!(
            "{}\n\nFound {} SSDP device(s)",
            table,
            devices.len().to_string().green()
        )
    }
}
