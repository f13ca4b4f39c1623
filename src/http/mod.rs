//! HTTP/1.x message model.
//!
//! # Architecture
//!
//! - **`parser`**: splits raw bytes into start line, header block and body
//! - **`message`**: the `Message` trait shared by requests and responses
//! - **`request`**: request line `method target protocol`
//! - **`response`**: status line `protocol status status_msg`
//!
//! # Parsing
//!
//! Parsing is a short linear pass with no recoverable middle state:
//!
//! ```text
//!        ┌─────────────┐
//!        │ Start line  │ ← up to the first line terminator
//!        └──────┬──────┘
//!               │ three fields
//!               ▼
//!        ┌─────────────┐
//!        │   Headers   │ ← up to the first blank line, via Headers::parse
//!        └──────┬──────┘
//!               │ blank line
//!               ▼
//!        ┌─────────────┐
//!        │    Body     │ ← the rest, verbatim
//!        └──────┬──────┘
//!               ▼
//!            Parsed    (any failure yields an Error and no message)
//! ```
//!
//! Rendering with [`Message::raw`](message::Message::raw) is the inverse:
//! start line, CRLF, headers, CRLF, body.
//!
//! # Example
//!
//! ```
//! use httpsuite::{Message, Response};
//!
//! let raw = b"HTTP/1.1 404 Not Found\r\nServer: demo\r\n\r\nnope";
//! let resp = Response::parse(raw).unwrap();
//!
//! assert_eq!(resp.status(), 404);
//! assert_eq!(resp.headers.get("server"), Some("demo"));
//! assert_eq!(resp.raw(), raw);
//! ```

pub mod message;
pub mod parser;
pub mod request;
pub mod response;
