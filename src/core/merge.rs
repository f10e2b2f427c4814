//! # Object Merge
//!
//! `extend` and `defaults` copy entries between key-value mappings.
//!
//! Sources are read with [`Collection::each`], so the copy order within a
//! single source is the map's own enumeration order. Across sources the
//! argument order decides: later sources win for `extend`, earlier ones for
//! `defaults`.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::collection::Collection;

/// A collection addressable by key
pub trait Mapping: Collection {
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Item>;

    fn assign(&mut self, key: Self::Key, value: Self::Item);
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Copy every entry of every source into `target`, overwriting
pub fn extend<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Item: Clone,
{
    for source in sources {
        source.each(|value, key, _| target.assign(key.clone(), value.clone()));
    }
    target
}

/// Copy entries whose key `target` does not have yet
pub fn defaults<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Item: Clone,
{
    for source in sources {
        source.each(|value, key, _| {
            if target.lookup(key).is_none() {
                target.assign(key.clone(), value.clone());
            }
        });
    }
    target
}

/// Like [`defaults`], but a `None` value also counts as missing
pub fn defaults_nullable<'t, M, V>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping<Item = Option<V>>,
    M::Key: Clone,
    V: Clone,
{
    for source in sources {
        source.each(|value, key, _| {
            if target.lookup(key).map_or(true, Option::is_none) {
                target.assign(key.clone(), value.clone());
            }
        });
    }
    target
}
