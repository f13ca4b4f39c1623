use std::fmt;

use crate::error::Result;
use crate::helpers::Headers;
use crate::http::message::Message;
use crate::http::parser::parse_request_line;
use crate::rfc::DEFAULT_PROTOCOL;

/// An HTTP request.
///
/// The request line is `method SP target SP protocol`. Nothing here checks
/// the method or protocol against the RFC tables; see
/// [`rfc::is_known_method`](crate::rfc::is_known_method) for that. The three
/// request line fields are private so that each one stays non-empty and free
/// of spaces, CR and LF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    target: String,
    protocol: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Request {
    /// Creates a request with no headers, an empty body and `HTTP/1.1`.
    ///
    /// Fails with [`Error::MalformedStartLine`](crate::Error::MalformedStartLine)
    /// when `method` or `target` is empty or holds a space, CR or LF.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpsuite::{Message, Request};
    /// let req = Request::new("GET", "/")?.with_header("Host", "example.com")?;
    /// assert_eq!(req.raw(), b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");
    /// # Ok::<(), httpsuite::Error>(())
    /// ```
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Result<Self> {
        let mut request = Self {
            method: String::new(),
            target: String::new(),
            protocol: String::new(),
            headers: Headers::new(),
            body: Vec::new(),
        };
        request.set_start_line(&format!(
            "{} {} {}",
            method.into(),
            target.into(),
            DEFAULT_PROTOCOL
        ))?;
        Ok(request)
    }

    /// The HTTP method (e.g. "GET")
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request target (e.g. "/index.html")
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn set_method(&mut self, method: impl Into<String>) -> Result<()> {
        let line = format!("{} {} {}", method.into(), self.target, self.protocol);
        self.set_start_line(&line)
    }

    pub fn set_target(&mut self, target: impl Into<String>) -> Result<()> {
        let line = format!("{} {} {}", self.method, target.into(), self.protocol);
        self.set_start_line(&line)
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Result<Self> {
        let line = format!("{} {} {}", self.method, self.target, protocol.into());
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
}

impl Message for Request {
    const ARROW: &'static str = "→";

    fn from_parts(start_line: &str, headers: Headers, body: Vec<u8>) -> Result<Self> {
        let (method, target, protocol) = parse_request_line(start_line)?;

        Ok(Self {
            method: method.to_string(),
            target: target.to_string(),
            protocol: protocol.to_string(),
            headers,
            body,
        })
    }

    fn start_line(&self) -> String {
        format!("{} {} {}", self.method, self.target, self.protocol)
    }

    fn set_start_line(&mut self, line: &str) -> Result<()> {
        let (method, target, protocol) = parse_request_line(line)?;
        self.method = method.to_string();
        self.target = target.to_string();
        self.protocol = protocol.to_string();
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

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
