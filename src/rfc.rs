//! Protocol tables from the HTTP RFCs.
//!
//! Each table is built once on first use and shared immutably for the life of
//! the process. Comments name the defining document as `rfcNNNN#section`.

use std::sync::LazyLock;

use crate::error::Result;
use crate::helpers::{FrozenSet, TwoWayFrozenDict};

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';
pub const CRLF: &[u8] = b"\r\n";

/// Protocol assumed when a message is built without one.
pub const DEFAULT_PROTOCOL: &str = "HTTP/1.1";

pub static PROTOCOLS: LazyLock<FrozenSet<&'static str>> = LazyLock::new(|| {
    FrozenSet::new([
        "HTTP/0.9", // rfc1945#section-3.1
        "HTTP/1.0", // rfc1945#section-3.1
        "HTTP/1.1", // rfc7230#section-2.6
        "HTTP/2.0", // rfc7540
        "HTTP/3.0", // draft-ietf-quic-http
    ])
});

// rfc7231#section-4
pub static REQUEST_METHODS: LazyLock<FrozenSet<&'static str>> = LazyLock::new(|| {
    FrozenSet::new([
        "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE",
    ])
});

// rfc7231#section-5
pub static REQUEST_HEADERS: LazyLock<FrozenSet<&'static str>> = LazyLock::new(|| {
    FrozenSet::new([
        // controls, rfc7231#section-5.1
        "Cache-Control",
        "Expect",
        "Host",
        "Max-Forwards",
        "Pragma",
        "Range",
        "TE",
        // conditionals, rfc7231#section-5.2
        "If-Match",
        "If-None-Match",
        "If-Modified-Since",
        "If-Unmodified-Since",
        "If-Range",
        // content negotiation, rfc7231#section-5.3
        "Accept",
        "Accept-Charset",
        "Accept-Encoding",
        "Accept-Language",
        // authentication credentials, rfc7231#section-5.4
        "Authorization",
        "Proxy-Authorization",
        // request context, rfc7231#section-5.5
        "From",
        "Referer",
        "User-Agent",
    ])
});

// rfc7231#section-7
pub static RESPONSE_HEADERS: LazyLock<FrozenSet<&'static str>> = LazyLock::new(|| {
    FrozenSet::new([
        // control data, rfc7231#section-7.1
        "Age",
        "Cache-Control",
        "Expires",
        "Date",
        "Location",
        "Retry-After",
        "Vary",
        "Warning",
        // validators, rfc7231#section-7.2
        "ETag",
        "Last-Modified",
        // authentication challenges, rfc7231#section-7.3
        "WWW-Authenticate",
        "Proxy-Authenticate",
        // response context, rfc7231#section-7.4
        "Accept-Ranges",
        "Allow",
        "Server",
    ])
});

const STATUS_TABLE: &[(u16, &str)] = &[
    // 1xx, rfc7231#section-6.2
    (100, "Continue"),
    (101, "Switching Protocols"),
    // 2xx, rfc7231#section-6.3
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"), // rfc7233#section-4.1
    // 3xx, rfc7231#section-6.4
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"), // rfc7232#section-4.1
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"), // rfc7538#section-3
    // 4xx, rfc7231#section-6.5
    (400, "Bad Request"),
    (401, "Unauthorized"), // rfc7235#section-3.1
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"), // rfc7235#section-3.2
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"), // rfc7232#section-4.2
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"), // rfc7233#section-4.4
    (417, "Expectation Failed"),
    (421, "Misdirected Request"), // rfc7540#section-9.1.2
    (426, "Upgrade Required"),
    (428, "Precondition Required"),           // rfc6585#section-3
    (429, "Too Many Requests"),               // rfc6585#section-4
    (431, "Request Header Fields Too Large"), // rfc6585#section-5
    (451, "Unavailable For Legal Reasons"),   // rfc7725#section-3
    // 5xx, rfc7231#section-6.6
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (511, "Network Authentication Required"), // rfc6585#section-6
];

pub static RESPONSE_STATUS: LazyLock<TwoWayFrozenDict<u16, &'static str>> = LazyLock::new(|| {
    TwoWayFrozenDict::new(STATUS_TABLE.iter().copied())
        .expect("status table reason phrases are unique")
});

/// Canonical reason phrase for a registered status code.
pub fn reason_phrase(code: u16) -> Result<&'static str> {
    RESPONSE_STATUS.forward(&code).copied()
}

/// Status code registered for an exact reason phrase.
pub fn status_code(phrase: &str) -> Result<u16> {
    RESPONSE_STATUS.backward(phrase).copied()
}

pub fn is_known_protocol(protocol: &str) -> bool {
    PROTOCOLS.contains(protocol)
}

pub fn is_known_method(method: &str) -> bool {
    REQUEST_METHODS.contains(method)
}

pub fn is_request_header(name: &str) -> bool {
    REQUEST_HEADERS.contains_ignore_case(name)
}

pub fn is_response_header(name: &str) -> bool {
    RESPONSE_HEADERS.contains_ignore_case(name)
}
