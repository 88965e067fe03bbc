//! Device description retrieval.
//!
//! Fetches the descriptor document advertised in a response's LOCATION
//! header. Failures here never abort a discovery session; the collector
//! records the "Unavailable" marker instead.

use std::time::Duration;

use reqwest::Client;

use crate::error::{DiscoveryError, Result};

/// Marker stored in place of a description body when the fetch fails.
pub const DESCRIPTION_UNAVAILABLE: &str = "Unavailable";

/// Timeout for a single description fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the HTTP client used for description fetches.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(DiscoveryError::Fetch)
}

/// Fetch the description document at `location`.
///
/// Redirects are followed; any non-success final status is a failure.
pub async fn fetch_description(client: &Client, location: &str) -> Result<String> {
    let response = client
        .get(location)
        .send()
        .await
        .map_err(DiscoveryError::Fetch)?;

    if !response.status().is_success() {
        return Err(DiscoveryError::FetchStatus {
            status: response.status(),
        });
    }

    response.text().await.map_err(DiscoveryError::Fetch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}/desc.xml", addr)
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<root></root>",
        )
        .await;

        let client = build_client().unwrap();
        let body = fetch_description(&client, &url).await.unwrap();
        assert_eq!(body, "<root></root>");
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_failure() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n").await;

        let client = build_client().unwrap();
        let result = fetch_description(&client, &url).await;
        assert!(matches!(
            result,
            Err(DiscoveryError::FetchStatus { status }) if status.as_u16() == 404
        ));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_failure() {
        let client = build_client().unwrap();
        let result = fetch_description(&client, "http://127.0.0.1:1/desc.xml").await;
        assert!(matches!(result, Err(DiscoveryError::Fetch(_))));
    }
}
