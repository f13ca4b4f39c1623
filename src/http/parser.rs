use crate::error::{Error, Result};
use crate::helpers::Headers;
use crate::rfc::{CR, LF};

/// A message split into its three sections, before the start line is
/// interpreted by [`Request`](crate::http::request::Request) or
/// [`Response`](crate::http::response::Response).
#[derive(Debug)]
pub struct RawMessage<'a> {
    pub start_line: &'a str,
    pub headers: Headers,
    pub body: &'a [u8],
}

/// Splits raw bytes into start line, parsed headers and body.
///
/// Lines end in `\n` with an optional preceding `\r`. The header section runs
/// up to the first blank line; everything after it is the body, untouched.
/// Without a blank line the body is empty.
pub fn parse_message(buf: &[u8]) -> Result<RawMessage<'_>> {
    // Start line
    let (line, rest) = next_line(buf);
    if line.is_empty() {
        return Err(malformed_start_line(line));
    }
    let start_line = std::str::from_utf8(line).map_err(|_| malformed_start_line(line))?;

    // Headers
    let (header_block, body) = split_header_block(rest);
    let headers = Headers::parse(header_block)?;

    tracing::trace!(
        start_line,
        headers = headers.len(),
        body = body.len(),
        "parsed message"
    );

    Ok(RawMessage {
        start_line,
        headers,
        body,
    })
}

/// Splits a request line into `method`, `target` and `protocol`.
///
/// Every single space separates a field, so exactly two spaces are allowed.
/// CR and LF are never part of a field.
pub fn parse_request_line(line: &str) -> Result<(&str, &str, &str)> {
    if has_line_break(line) {
        return Err(malformed_start_line(line.as_bytes()));
    }
    let parts: Vec<&str> = line.split(' ').collect();

    match parts.as_slice() {
        [method, target, protocol]
            if !method.is_empty() && !target.is_empty() && !protocol.is_empty() =>
        {
            Ok((*method, *target, *protocol))
        }
        _ => {
            tracing::debug!(line, fields = parts.len(), "rejected request line");
            Err(malformed_start_line(line.as_bytes()))
        }
    }
}

/// Splits a status line into `protocol`, `status` and `status_msg`.
///
/// Only the first two spaces separate fields; the reason phrase keeps its own
/// spaces and may be empty. `HTTP/1.1 404 Not Found` is therefore three
/// fields, not four. CR and LF are never part of a field.
pub fn parse_status_line(line: &str) -> Result<(&str, u16, &str)> {
    if has_line_break(line) {
        return Err(malformed_start_line(line.as_bytes()));
    }
    let mut parts = line.splitn(3, ' ');

    let (Some(protocol), Some(status), Some(status_msg)) = (parts.next(), parts.next(), parts.next())
    else {
        tracing::debug!(line, "rejected status line");
        return Err(malformed_start_line(line.as_bytes()));
    };

    if protocol.is_empty() || status.is_empty() {
        return Err(malformed_start_line(line.as_bytes()));
    }

    Ok((protocol, parse_status(status)?, status_msg))
}

/// Parses a three digit status code in `100..=599`.
pub fn parse_status(token: &str) -> Result<u16> {
    let invalid = || Error::InvalidStatusCode {
        status: token.to_string(),
    };

    if token.len() != 3 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let code: u16 = token.parse().map_err(|_| invalid())?;
    check_status(code).map_err(|_| invalid())
}

pub fn check_status(code: u16) -> Result<u16> {
    if (100..=599).contains(&code) {
        Ok(code)
    } else {
        Err(Error::InvalidStatusCode {
            status: code.to_string(),
        })
    }
}

/// Returns the first line (terminator stripped) and whatever follows it.
fn next_line(buf: &[u8]) -> (&[u8], &[u8]) {
    match buf.iter().position(|&b| b == LF) {
        Some(end) => (strip_cr(&buf[..end]), &buf[end + 1..]),
        None => (strip_cr(buf), &[]),
    }
}

/// Splits at the first blank line into `(header_block, body)`.
fn split_header_block(buf: &[u8]) -> (&[u8], &[u8]) {
    let mut offset = 0;

    while let Some(len) = buf[offset..].iter().position(|&b| b == LF) {
        if strip_cr(&buf[offset..offset + len]).is_empty() {
            return (&buf[..offset], &buf[offset + len + 1..]);
        }
        offset += len + 1;
    }

    (buf, &[])
}

fn has_line_break(line: &str) -> bool {
    line.contains([CR as char, LF as char])
}

fn strip_cr(line: &[u8]) -> &[u8] {
    match line.split_last() {
        Some((&CR, head)) => head,
        _ => line,
    }
}

fn malformed_start_line(line: &[u8]) -> Error {
    Error::MalformedStartLine {
        line: String::from_utf8_lossy(line).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_message(raw).unwrap();

        assert_eq!(parsed.start_line, "GET / HTTP/1.1");
        assert_eq!(parsed.headers.get("Host"), Some("example.com"));
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn body_is_taken_verbatim() {
        let raw = b"POST /x HTTP/1.1\r\nContent-Length: 99\r\n\r\nline one\r\n\r\nline two";

        let parsed = parse_message(raw).unwrap();

        assert_eq!(parsed.body, b"line one\r\n\r\nline two");
    }

    #[test]
    fn bare_lf_terminators() {
        let raw = b"HTTP/1.1 200 OK\nServer: x\n\nbody";

        let parsed = parse_message(raw).unwrap();

        assert_eq!(parsed.start_line, "HTTP/1.1 200 OK");
        assert_eq!(parsed.headers.get("server"), Some("x"));
        assert_eq!(parsed.body, b"body");
    }

    #[test]
    fn missing_blank_line_means_empty_body() {
        let parsed = parse_message(b"GET / HTTP/1.1\r\nHost: a").unwrap();

        assert_eq!(parsed.headers.get("Host"), Some("a"));
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn empty_input_has_no_start_line() {
        assert!(matches!(
            parse_message(b""),
            Err(Error::MalformedStartLine { .. })
        ));
        assert!(matches!(
            parse_message(b"\r\nHost: a\r\n\r\n"),
            Err(Error::MalformedStartLine { .. })
        ));
    }

    #[test]
    fn start_lines_reject_embedded_cr() {
        assert!(parse_request_line("GET /a\rb HTTP/1.1").is_err());
        assert!(parse_status_line("HTTP/1.1 200 O\rK").is_err());
        assert!(parse_message(b"GET /a\rb HTTP/1.1\r\n\r\n").is_err());
    }

    #[test]
    fn status_line_keeps_spaces_in_reason() {
        let (protocol, status, msg) =
            parse_status_line("HTTP/1.1 505 HTTP Version Not Supported").unwrap();

        assert_eq!(protocol, "HTTP/1.1");
        assert_eq!(status, 505);
        assert_eq!(msg, "HTTP Version Not Supported");
    }

    #[test]
    fn status_range() {
        assert_eq!(parse_status("100").unwrap(), 100);
        assert_eq!(parse_status("599").unwrap(), 599);
        assert!(parse_status("099").is_err());
        assert!(parse_status("600").is_err());
        assert!(parse_status("20").is_err());
        assert!(parse_status("+20").is_err());
        assert!(parse_status("abc").is_err());
    }
}
