//! SSDP search transmission.
//!
//! Builds the `M-SEARCH` request and sends it to the multicast discovery
//! group, returning the still-open socket for the collector to drain.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::time::sleep;
use tracing::debug;

use crate::error::DiscoveryError;
use crate::types::SearchRequest;

/// SSDP multicast discovery group
pub const SSDP_ADDR: Ipv4Addr = Ipv4Addr::new(239, 255, 255, 250);

/// SSDP multicast discovery port
pub const SSDP_PORT: u16 = 1900;

/// Delay between repeated sends, to reduce loss on lossy networks
/// without flooding
const SEND_SPACING: Duration = Duration::from_millis(100);

/// Build the `M-SEARCH` request message.
///
/// The HOST header always names the multicast group, regardless of where
/// the datagram is actually sent.
fn build_search_message(search_target: &str, mx: u8) -> String {
    format!(
        "M-SEARCH * HTTP/1.1\r\n\
         HOST: {}:{}\r\n\
         MAN: \"ssdp:discover\"\r\n\
         MX: {}\r\n\
         ST: {}\r\n\
         \r\n",
        SSDP_ADDR, SSDP_PORT, mx, search_target
    )
}

/// Create the UDP socket used for the search, bound to an ephemeral port.
fn create_search_socket() -> Result<std::net::UdpSocket, std::io::Error> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, 0).into();
    socket.bind(&addr.into())?;

    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// Send an SSDP search to the multicast discovery group.
///
/// The message is sent `request.retries` times with a short fixed delay
/// between sends. Returns the open socket, not yet read from, so the caller
/// can collect responses. Any socket-creation or send error aborts
/// immediately; the open itself is never retried.
pub async fn send_search(request: &SearchRequest) -> Result<UdpSocket, DiscoveryError> {
    send_search_to(request, SocketAddr::from((SSDP_ADDR, SSDP_PORT))).await
}

pub(crate) async fn send_search_to(
    request: &SearchRequest,
    target: SocketAddr,
) -> Result<UdpSocket, DiscoveryError> {
    request.validate()?;

    let std_socket = create_search_socket().map_err(DiscoveryError::Transmit)?;
    let socket = UdpSocket::from_std(std_socket).map_err(DiscoveryError::Transmit)?;

    let message = build_search_message(&request.search_target, request.mx);

    for attempt in 1..=request.retries {
        socket
            .send_to(message.as_bytes(), target)
            .await
            .map_err(DiscoveryError::Transmit)?;
        debug!(attempt, total = request.retries, "search datagram sent");
        sleep(SEND_SPACING).await;
    }

    Ok(socket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[test]
    fn test_search_message_bytes() {
        let message = build_search_message("upnp:rootdevice", 2);
        assert_eq!(
            message,
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: 239.255.255.250:1900\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: 2\r\n\
             ST: upnp:rootdevice\r\n\
             \r\n"
        );
    }

    #[test]
    fn test_search_message_reflects_target_and_mx() {
        let message = build_search_message("urn:schemas-upnp-org:device:MediaRenderer:1", 5);
        assert!(message.contains("ST: urn:schemas-upnp-org:device:MediaRenderer:1\r\n"));
        assert!(message.contains("MX: 5\r\n"));
        assert!(message.ends_with("\r\n\r\n"));
    }

    #[tokio::test]
    async fn test_sends_exactly_retries_datagrams() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let target = receiver.local_addr().unwrap();

        let request = SearchRequest {
            retries: 3,
            ..Default::default()
        };
        let socket = send_search_to(&request, target).await.unwrap();

        let mut buf = [0u8; 2048];
        let mut payloads = Vec::new();
        for _ in 0..3 {
            let (len, from) = timeout(Duration::from_secs(2), receiver.recv_from(&mut buf))
                .await
                .expect("expected a search datagram")
                .unwrap();
            assert_eq!(from.port(), socket.local_addr().unwrap().port());
            payloads.push(buf[..len].to_vec());
        }

        assert!(payloads.iter().all(|p| *p == payloads[0]));
        let text = String::from_utf8(payloads[0].clone()).unwrap();
        assert!(text.starts_with("M-SEARCH * HTTP/1.1\r\n"));
        assert!(text.contains("ST: upnp:rootdevice\r\n"));

        // No fourth datagram
        let extra = timeout(Duration::from_millis(300), receiver.recv_from(&mut buf)).await;
        assert!(extra.is_err());
    }

    #[tokio::test]
    async fn test_invalid_request_aborts_before_send() {
        let request = SearchRequest {
            retries: 0,
            ..Default::default()
        };
        let result = send_search(&request).await;
        assert!(matches!(result, Err(DiscoveryError::InvalidRequest(_))));
    }
}
