use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};

/// An immutable bidirectional mapping.
///
/// Built once from a forward mapping `K -> V`; the reverse mapping `V -> K` is
/// derived at construction. Values must be pairwise unique, otherwise the
/// reverse direction would not be a function and construction fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoWayFrozenDict<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    forward: HashMap<K, V>,
    backward: HashMap<V, K>,
}

impl<K, V> TwoWayFrozenDict<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self> {
        let pairs = pairs.into_iter();
        let (lower, _) = pairs.size_hint();
        let mut forward = HashMap::with_capacity(lower);
        let mut backward = HashMap::with_capacity(lower);

        for (key, value) in pairs {
            if forward.contains_key(&key) {
                return Err(Error::DuplicateKey {
                    key: format!("{key:?}"),
                });
            }
            if backward.contains_key(&value) {
                return Err(Error::DuplicateValue {
                    value: format!("{value:?}"),
                });
            }
            backward.insert(value.clone(), key.clone());
            forward.insert(key, value);
        }

        Ok(Self { forward, backward })
    }

    /// Looks up the value mapped to `key`.
    pub fn forward<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + fmt::Debug + ?Sized,
    {
        self.forward.get(key).ok_or_else(|| Error::KeyNotFound {
            key: format!("{key:?}"),
        })
    }

    /// Looks up the key that maps to `value`.
    pub fn backward<Q>(&self, value: &Q) -> Result<&K>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + fmt::Debug + ?Sized,
    {
        self.backward.get(value).ok_or_else(|| Error::KeyNotFound {
            key: format!("{value:?}"),
        })
    }
}

impl<K, V> TwoWayFrozenDict<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.forward.contains_key(key)
    }

    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.backward.contains_key(value)
    }

    /// Forward pairs, in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.forward.iter()
    }

    /// Number of forward pairs.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
