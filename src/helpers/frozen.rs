use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;

/// An immutable set.
///
/// Built once from any collection (duplicates collapse), then only answers
/// membership, iteration and size questions. There is no way to add or
/// remove values after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenSet<T: Eq + Hash> {
    values: HashSet<T>,
}

impl<T: Eq + Hash> FrozenSet<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.values.contains(value)
    }

    /// Iterates in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FrozenSet<&'static str> {
    /// ASCII case-insensitive membership, for field names and tokens.
    pub fn contains_ignore_case(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrozenSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a FrozenSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for FrozenSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // sorted so the output is stable between runs
        let mut rendered: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        rendered.sort();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}
