//! JSON-formatted output for CLI.

use serde::Serialize;
use serde_json::json;

use ssdp_scout_core::DiscoveredDevice;

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_devices(&self, devices: &[DiscoveredDevice]) -> String {
        let output = json!({
            "devices": devices,
            "count": devices.len()
        });
        Self::to_json(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_json_output_parses_back() {
        let device = DiscoveredDevice {
            ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5)),
            port: 49152,
            headers: HashMap::new(),
            location: "http://10.0.0.5/desc.xml".to_string(),
            description: Some("Unavailable".to_string()),
        };

        let output = JsonOutput::new().format_devices(&[device]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["devices"][0]["ip"], "10.0.0.5");
        assert_eq!(value["devices"][0]["port"], 49152);
        assert_eq!(value["devices"][0]["description"], "Unavailable");
    }

    #[test]
    fn test_empty_list_is_zero_count() {
        let output = JsonOutput::new().format_devices(&[]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 0);
        assert!(value["devices"].as_array().unwrap().is_empty());
    }
}
