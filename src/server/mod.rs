//! Socket glue used by the demo binary.
//!
//! Nothing in here is needed to parse or render messages; it shows the
//! message layer sitting behind a real connection.

pub mod client;
pub mod framing;
pub mod listener;
