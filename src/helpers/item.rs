use std::fmt;

use crate::error::{Error, Result};

/// A single header field.
///
/// An `Item` is immutable once built. Changing a header means replacing the
/// `Item` inside its owning [`Headers`](crate::helpers::Headers).
///
/// Every `Item` renders as exactly one `key: value` line, so construction
/// rejects anything that would split or shift that line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    key: String,
    value: String,
}

impl Item {
    /// Builds a header field.
    ///
    /// Fails with [`Error::MalformedHeader`] when the name is empty or holds a
    /// `:`, CR or LF, or when the value holds CR or LF or starts with a space
    /// or tab.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let value = value.into();

        let bad_name = key.is_empty() || key.contains([':', '\r', '\n']);
        let bad_value = value.contains(['\r', '\n']) || value.starts_with([' ', '\t']);
        if bad_name || bad_value {
            tracing::debug!(key = ?key, value = ?value, "rejected header field");
            return Err(Error::MalformedHeader {
                line: format!("{key}: {value}"),
            });
        }

        Ok(Self { key, value })
    }

    /// Field name exactly as it was given or parsed.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Case-insensitive field name comparison.
    pub fn is(&self, name: &str) -> bool {
        self.key.eq_ignore_ascii_case(name)
    }

    /// Wire rendering: `key: value\r\n`.
    pub fn raw(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.key.len() + self.value.len() + 4);
        self.write_raw(&mut buf);
        buf
    }

    /// Human readable rendering: `key: value`.
    pub fn string(&self) -> String {
        self.to_string()
    }

    pub(crate) fn write_raw(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.key.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(self.value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
