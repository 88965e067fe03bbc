//! Response collection for a discovery session.
//!
//! Owns the search socket after transmission and drains it until the wall
//! clock window closes, turning each usable datagram into a
//! [`DiscoveredDevice`].

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Client;
use tokio::net::UdpSocket;
use tokio::time::{timeout, Instant};
use tracing::{debug, info, warn};

use crate::descriptor::{self, DESCRIPTION_UNAVAILABLE};
use crate::discovery::headers::parse_headers;
use crate::types::DiscoveredDevice;

/// Largest payload a single UDP datagram can carry
const RECV_BUFFER_SIZE: usize = 65_507;

/// Options for one collection pass.
#[derive(Debug, Clone)]
pub struct CollectorOptions {
    /// Overall wall-clock window for the session
    pub max_wait: Duration,
    /// Per-receive timeout; a single blocked read never exceeds this
    pub socket_timeout: Duration,
    /// Fetch each device's description document from its LOCATION URL
    pub fetch_descriptions: bool,
    /// Stop the loop on the first receive timeout instead of waiting out
    /// the full window
    pub stop_on_first_timeout: bool,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            max_wait: Duration::from_secs(2),
            socket_timeout: Duration::from_secs(5),
            fetch_descriptions: true,
            stop_on_first_timeout: true,
        }
    }
}

/// Collect discovery responses until the window closes.
///
/// Devices are returned in receipt order. Receive-side errors end the loop
/// and whatever was gathered so far is returned; no error escapes this
/// function. The socket is consumed and dropped on every exit path. An empty
/// window yields an empty vector, not an error.
///
/// When `fetch_descriptions` is set, each record's description is fetched
/// inline, one at a time, before the loop resumes receiving.
pub async fn collect(socket: UdpSocket, options: CollectorOptions) -> Vec<DiscoveredDevice> {
    // A failed client build still counts as attempting the fetch: records
    // get the unavailable marker, not the fetch-disabled shape.
    let client = if options.fetch_descriptions {
        match descriptor::build_client() {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("HTTP client unavailable, descriptions will be marked: {}", e);
                None
            }
        }
    } else {
        None
    };

    let mut devices = Vec::new();
    let mut buf = vec![0u8; RECV_BUFFER_SIZE];
    let deadline = Instant::now() + options.max_wait;

    while Instant::now() < deadline {
        match timeout(options.socket_timeout, socket.recv_from(&mut buf)).await {
            Ok(Ok((len, addr))) => {
                let device = handle_datagram(
                    &buf[..len],
                    addr,
                    options.fetch_descriptions,
                    client.as_ref(),
                )
                .await;
                if let Some(device) = device {
                    devices.push(device);
                }
            }
            Ok(Err(e)) => {
                warn!("UDP receive error: {}", e);
                break;
            }
            Err(_) => {
                debug!("socket timeout, no more responses pending");
                if options.stop_on_first_timeout {
                    break;
                }
            }
        }
    }

    devices
}

/// Turn one datagram into a device record, if it carries a LOCATION header.
///
/// When fetching is on, any failure (including having no usable HTTP
/// client) keeps the record and stores the unavailable marker; the record
/// is only shaped like fetch-disabled when fetching actually is.
async fn handle_datagram(
    payload: &[u8],
    addr: SocketAddr,
    fetch_description: bool,
    client: Option<&Client>,
) -> Option<DiscoveredDevice> {
    let headers = parse_headers(payload);
    let location = headers.get("LOCATION")?.clone();

    let description = if !fetch_description {
        None
    } else {
        Some(match client {
            Some(client) => match descriptor::fetch_description(client, &location).await {
                Ok(body) => {
                    debug!(location = %location, "device description:\n{}", body);
                    body
                }
                Err(e) => {
                    warn!(location = %location, "failed to retrieve device description: {}", e);
                    DESCRIPTION_UNAVAILABLE.to_string()
                }
            },
            None => DESCRIPTION_UNAVAILABLE.to_string(),
        })
    };

    info!("found device at {} - location: {}", addr, location);

    Some(DiscoveredDevice {
        ip: addr.ip(),
        port: addr.port(),
        headers,
        location,
        description,
    })
}
