//! Value types the message layer is built from.
//!
//! - **`item`**: one header field
//! - **`headers`**: ordered, case-insensitive, multi-value header collection
//! - **`frozen`**: immutable set used for the RFC token tables
//! - **`two_way`**: immutable bidirectional mapping used for status codes

pub mod frozen;
pub mod headers;
pub mod item;
pub mod two_way;

pub use frozen::FrozenSet;
pub use headers::Headers;
pub use item::Item;
pub use two_way::TwoWayFrozenDict;
