//! The ordered pair sequence BTON uses to serialize maps.
//!
//! A [`PairMap`] is not a lookup structure. It is exactly the key/value
//! pairs it was built from, in the order they were given: nothing is sorted,
//! nothing is deduplicated, and the wire format reproduces the sequence
//! byte-for-byte. Callers that want uniqueness or fast lookup convert to a
//! real map themselves.
//!
//! # Example
//!
//! ```
//! use bton::prelude::*;
//!
//! let m = PairMap::from(vec![
//!     (Bton::from("b"), Bton::from(1)),
//!     (Bton::from("a"), Bton::from(2)),
//!     (Bton::from("b"), Bton::from(3)),
//! ]);
//!
//! // order and duplicates survive
//! assert_eq!(m.len(), 3);
//! let first = m.iter().next().unwrap();
//! assert_eq!(first.0, Bton::from("b"));
//! ```

use std::{collections::BTreeMap, iter::FromIterator, slice::Iter, vec::IntoIter};

/// An insertion-ordered sequence of key/value pairs.
///
/// See also: [module level documentation](self).
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
pub struct PairMap<K, V>(Vec<(K, V)>);

impl<K, V> PairMap<K, V> {
    /// Creates an empty `PairMap`.
    pub fn new() -> Self { PairMap(Vec::new()) }

    /// Appends a pair at the end of the sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use bton::pairs::PairMap;
    ///
    /// let mut m = PairMap::new();
    /// m.push("key", 250);
    ///
    /// assert_eq!(m.len(), 1);
    /// ```
    pub fn push(&mut self, key: K, value: V) { self.0.push((key, value)) }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the `PairMap` holds no pairs.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns an [`Iter`] over the pairs, in order.
    pub fn iter(&self) -> Iter<(K, V)> { self.0.iter() }
}

impl<K, V> Default for PairMap<K, V> {
    fn default() -> Self { Self::new() }
}

impl<K, V> From<Vec<(K, V)>> for PairMap<K, V> {
    fn from(v: Vec<(K, V)>) -> Self { PairMap(v) }
}

impl<K, V> From<PairMap<K, V>> for Vec<(K, V)> {
    fn from(m: PairMap<K, V>) -> Self { m.0 }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for PairMap<K, V> {
    fn from(bt: BTreeMap<K, V>) -> Self { Self::from_iter(bt) }
}

impl<K, V> IntoIterator for PairMap<K, V> {
    type IntoIter = IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<(K, V)> { self.0.into_iter() }
}

impl<K, V> FromIterator<(K, V)> for PairMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> PairMap<K, V> {
        PairMap(Vec::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_preserved() {
        let m = PairMap::from(vec![(3, "c"), (1, "a"), (2, "b")]);
        let keys: Vec<i32> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut m = PairMap::new();
        m.push("k", 1);
        m.push("k", 2);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn btree_conversion_is_key_ordered() {
        let mut bt = BTreeMap::new();
        bt.insert(2, "b");
        bt.insert(1, "a");
        let m = PairMap::from(bt);
        let keys: Vec<i32> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 2]);
    }
}
