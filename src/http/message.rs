use crate::error::Result;
use crate::helpers::Headers;
use crate::http::parser;
use crate::rfc::CRLF;

/// Shape shared by [`Request`](crate::http::request::Request) and
/// [`Response`](crate::http::response::Response).
///
/// Implementors only describe their start line; parsing the full message and
/// rendering it back to bytes are provided here. The raw rendering is always
/// computed from the structured fields, never stored.
pub trait Message: Sized {
    /// Prefix used by [`pretty`](Message::pretty) for every line.
    const ARROW: &'static str;

    /// Builds the message from an already split start line, headers and body.
    fn from_parts(start_line: &str, headers: Headers, body: Vec<u8>) -> Result<Self>;

    /// Renders the request or status line, without terminator.
    fn start_line(&self) -> String;

    /// Re-parses `line` into the start line fields. On error nothing changes.
    fn set_start_line(&mut self, line: &str) -> Result<()>;

    fn protocol(&self) -> &str;

    fn headers(&self) -> &Headers;

    fn headers_mut(&mut self) -> &mut Headers;

    fn body(&self) -> &[u8];

    fn set_body(&mut self, body: impl Into<Vec<u8>>);

    /// Parses one complete message.
    ///
    /// The bytes must hold exactly one message; framing against
    /// `Content-Length` or chunked encoding is the caller's job.
    fn parse(raw: &[u8]) -> Result<Self> {
        let parts = parser::parse_message(raw)?;
        Self::from_parts(parts.start_line, parts.headers, parts.body.to_vec())
    }

    /// Wire rendering: start line, headers, blank line, body.
    fn raw(&self) -> Vec<u8> {
        let start_line = self.start_line();
        let mut buf = Vec::with_capacity(start_line.len() + self.body().len() + 256);

        buf.extend_from_slice(start_line.as_bytes());
        buf.extend_from_slice(CRLF);
        self.headers().write_raw(&mut buf);
        buf.extend_from_slice(CRLF);
        buf.extend_from_slice(self.body());

        buf
    }

    /// Text form of [`raw`](Message::raw); invalid UTF-8 in the body is
    /// replaced.
    fn string(&self) -> String {
        String::from_utf8_lossy(&self.raw()).into_owned()
    }

    /// Every non-empty line of [`string`](Message::string), prefixed with
    /// [`ARROW`](Message::ARROW).
    fn pretty(&self) -> String {
        self.string()
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| format!("{} {}", Self::ARROW, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Declared `Content-Length`, if present and numeric.
    fn content_length(&self) -> Option<usize> {
        self.headers()
            .get("Content-Length")
            .and_then(|v| v.trim().parse().ok())
    }
}
