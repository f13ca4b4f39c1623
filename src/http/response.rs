use std::fmt;

use crate::error::Result;
use crate::helpers::Headers;
use crate::http::message::Message;
use crate::http::parser::{check_status, parse_status_line};
use crate::rfc::{self, DEFAULT_PROTOCOL};

/// An HTTP response.
///
/// The status line is `protocol SP status SP status_msg`. When a response is
/// built from a bare code, `status_msg` is taken from
/// [`RESPONSE_STATUS`](crate::rfc::RESPONSE_STATUS).
///
/// Parsing splits the status line on its first two spaces only, so the
/// reason phrase keeps any spaces of its own (`HTTP/1.1 404 Not Found`) and
/// may be empty (`HTTP/1.1 204 `).
///
/// The status line fields are private. The status code is always in
/// `100..=599`, the protocol is non-empty without spaces, and none of the
/// three holds CR or LF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    protocol: String,
    status: u16,
    status_msg: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response whose reason phrase is the canonical one for
    /// `status`.
    ///
    /// Fails with [`Error::KeyNotFound`](crate::Error::KeyNotFound) when the
    /// code is not registered.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpsuite::Response;
    /// let resp = Response::new(404).unwrap();
    /// assert_eq!(resp.status_msg(), "Not Found");
    /// ```
    pub fn new(status: u16) -> Result<Self> {
        let status_msg = rfc::reason_phrase(status)?;
        Ok(Self::build(status, status_msg.to_string()))
    }

    /// Creates a response with an explicit reason phrase.
    ///
    /// Any code in `100..=599` is accepted, registered or not. A reason
    /// phrase holding CR or LF is
    /// [`Error::MalformedStartLine`](crate::Error::MalformedStartLine).
    pub fn with_status_msg(status: u16, status_msg: impl Into<String>) -> Result<Self> {
        let status = check_status(status)?;
        let mut response = Self::build(status, String::new());
        let line = format!("{} {} {}", response.protocol, status, status_msg.into());
        response.set_start_line(&line)?;
        Ok(response)
    }

    /// Numeric status code (e.g. 404)
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase (e.g. "Not Found")
    pub fn status_msg(&self) -> &str {
        &self.status_msg
    }

    /// Changes the status code and re-derives the reason phrase.
    pub fn set_status(&mut self, status: u16) -> Result<()> {
        let status_msg = rfc::reason_phrase(status)?;
        self.status = status;
        self.status_msg = status_msg.to_string();
        Ok(())
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Result<Self> {
        let line = format!("{} {} {}", protocol.into(), self.status, self.status_msg);
        self.set_start_line(&line)?;
        Ok(self)
    }

    /// Appends a header, keeping any existing entry with the same name.
    /// Fails like [`Item::new`](crate::Item::new).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        self.headers.add(key, value)?;
        Ok(self)
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn build(status: u16, status_msg: String) -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            status,
            status_msg,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }
}

impl Message for Response {
    const ARROW: &'static str = "←";

    fn from_parts(start_line: &str, headers: Headers, body: Vec<u8>) -> Result<Self> {
        let (protocol, status, status_msg) = parse_status_line(start_line)?;

        Ok(Self {
            protocol: protocol.to_string(),
            status,
            status_msg: status_msg.to_string(),
            headers,
            body,
        })
    }

    fn start_line(&self) -> String {
        format!("{} {} {}", self.protocol, self.status, self.status_msg)
    }

    fn set_start_line(&mut self, line: &str) -> Result<()> {
        let (protocol, status, status_msg) = parse_status_line(line)?;
        self.protocol = protocol.to_string();
        self.status = status;
        self.status_msg = status_msg.to_string();
        Ok(())
    }

    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn body(&self) -> &[u8] {
        &self.body
    }

    fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
