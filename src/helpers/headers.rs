//! Ordered, case-insensitive, multi-value header collection.
//!
//! Fields are kept as a sequence of [`Item`]s in the order they were parsed or
//! added, next to an index from the lowercased field name to the positions of
//! every entry sharing that name. The sequence is the source of truth; the
//! index is rebuilt after any mutation that shifts positions.
//!
//! Serialization always emits `name: value` with a CRLF terminator, so a block
//! parsed from `Name:value\n` comes back as `Name: value\r\n`.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::{Error, Result};
use crate::helpers::{FrozenSet, Item};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    items: Vec<Item>,
    index: HashMap<String, Vec<usize>>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from `(name, value)` pairs, in order.
    ///
    /// Stops at the first pair [`Item::new`] rejects.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| Item::new(name, value))
            .collect()
    }

    /// Parses a raw header block.
    ///
    /// The block is split on `\n` (a trailing `\r` is dropped from each line),
    /// and each line on its first `:`. Leading spaces and tabs are trimmed off
    /// the value. Blank lines are skipped. A line without a `:`, with an empty
    /// name, or with a stray CR inside it is [`Error::MalformedHeader`].
    pub fn parse(block: &[u8]) -> Result<Self> {
        let mut headers = Headers::new();

        for line in block.split(|&b| b == b'\n') {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            let malformed = || Error::MalformedHeader {
                line: String::from_utf8_lossy(line).into_owned(),
            };

            let text = std::str::from_utf8(line).map_err(|_| malformed())?;
            let (name, value) = text.split_once(':').ok_or_else(malformed)?;
            let item = Item::new(name, value.trim_start_matches([' ', '\t']))
                .map_err(|_| malformed())?;

            headers.push(item);
        }

        tracing::trace!(count = headers.len(), "parsed header block");
        Ok(headers)
    }

    /// First value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions(name)
            .first()
            .map(|&pos| self.items[pos].value())
    }

    /// Every value stored under `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.positions(name)
            .iter()
            .map(|&pos| self.items[pos].value())
            .collect()
    }

    /// Like [`get`](Self::get), but a missing name is an error.
    pub fn get_required(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| Error::KeyNotFound {
            key: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.positions(name).is_empty()
    }

    /// Replaces every entry named `name` with a single entry.
    ///
    /// The new entry takes the slot of the first previous occurrence, or is
    /// appended when the name was absent. Fails like [`Item::new`].
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.replace(Item::new(name, value)?);
        Ok(())
    }

    /// Appends an entry, leaving existing entries with the same name alone.
    /// Fails like [`Item::new`].
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.push(Item::new(name, value)?);
        Ok(())
    }

    /// Removes every entry named `name` and returns how many were dropped.
    pub fn delete(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is(name));
        let removed = before - self.items.len();
        if removed > 0 {
            self.reindex();
        }
        removed
    }

    /// Dictionary-style update.
    ///
    /// For every name present in `other`, this collection's entries under that
    /// name are replaced by `other`'s entries. Names only present here stay
    /// untouched.
    pub fn merge(&mut self, other: &Headers) {
        let mut replaced = HashSet::new();
        for item in other.iter() {
            if replaced.insert(item.key().to_ascii_lowercase()) {
                self.replace(item.clone());
            } else {
                self.push(item.clone());
            }
        }
    }

    /// Field names, in order, that are not in `known` (compared ignoring
    /// ASCII case). Each name is reported once.
    pub fn names_outside(&self, known: &FrozenSet<&'static str>) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(Item::key)
            .filter(|name| !known.contains_ignore_case(name))
            .filter(|name| seen.insert(name.to_ascii_lowercase()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Wire rendering: every entry as `name: value\r\n`, in order.
    ///
    /// The blank line closing a header section is added by the owning message.
    pub fn raw(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_raw(&mut buf);
        buf
    }

    /// Entries as `name: value`, joined with CRLF and without a trailing
    /// terminator.
    pub fn string(&self) -> String {
        self.to_string()
    }

    pub(crate) fn write_raw(&self, buf: &mut Vec<u8>) {
        for item in &self.items {
            item.write_raw(buf);
        }
    }

    fn positions(&self, name: &str) -> &[usize] {
        self.index
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn replace(&mut self, item: Item) {
        let Some(first) = self.positions(item.key()).first().copied() else {
            self.push(item);
            return;
        };

        let key = item.key().to_string();
        self.items[first] = item;

        let mut pos = 0;
        self.items.retain(|existing| {
            let keep = pos == first || !existing.is(&key);
            pos += 1;
            keep
        });
        self.reindex();
    }

    fn push(&mut self, item: Item) {
        self.index
            .entry(item.key().to_ascii_lowercase())
            .or_default()
            .push(self.items.len());
        self.items.push(item);
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, item) in self.items.iter().enumerate() {
            self.index
                .entry(item.key().to_ascii_lowercase())
                .or_default()
                .push(pos);
        }
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("\r\n")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl FromIterator<Item> for Headers {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

impl Extend<Item> for Headers {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
