//! httpsuite - HTTP/1.x messages as structured values
//!
//! Parses raw request and response bytes into [`Request`] and [`Response`],
//! and renders them back to bytes. Headers are kept in an ordered,
//! case-insensitive, multi-value [`Headers`] collection. No I/O happens in
//! the message layer; the `server` module is demo glue only.

pub mod config;
pub mod error;
pub mod helpers;
pub mod http;
pub mod rfc;
pub mod server;

pub use error::{Error, Result};
pub use helpers::{FrozenSet, Headers, Item, TwoWayFrozenDict};
pub use http::message::Message;
pub use http::request::Request;
pub use http::response::Response;
