//! Header parsing for SSDP response datagrams.

use crate::types::ParsedHeaders;

/// Parse a response datagram into a header map.
///
/// Responses are treated as loose HTTP-style header blocks: every line
/// containing a colon contributes a header, split on the first colon, with
/// the name trimmed and uppercased and the value trimmed. Lines without a
/// colon (including any status line) are ignored. Payload bytes are decoded
/// best-effort; invalid UTF-8 sequences are replaced rather than rejected.
///
/// Duplicate header names keep the last value seen.
pub fn parse_headers(payload: &[u8]) -> ParsedHeaders {
    let text = String::from_utf8_lossy(payload);

    let mut headers = ParsedHeaders::new();
    for line in text.lines() {
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_uppercase(), value.trim().to_string());
        }
    }

    headers
}
