//! # Iteration Core
//!
//! The single traversal primitive everything else composes over.
//!
//! A [`Collection`] visits each element as `(value, key, collection)`:
//! - Sequences (`[T]`, `[T; N]`, `Vec<T>`) pass the 0-based index, ascending
//! - Mappings (`HashMap`, `BTreeMap`) pass the key, in the map's own
//!   enumeration order (sorted for `BTreeMap`, unspecified for `HashMap`)
//!
//! Only [`Collection::each_while`] is required. It may stop early, which is
//! what lets `index_of` short-circuit without a second traversal routine.

use std::collections::{BTreeMap, HashMap};
use std::ops::ControlFlow;

/// Anything that can be traversed element by element
pub trait Collection {
    /// Index type for sequences, key type for mappings
    type Key;

    /// Element type
    type Item;

    /// Visit elements until the iterator breaks
    fn each_while<F>(&self, iterator: F)
    where
        F: FnMut(&Self::Item, &Self::Key, &Self) -> ControlFlow<()>;

    /// Visit every element
    fn each<F>(&self, mut iterator: F)
    where
        F: FnMut(&Self::Item, &Self::Key, &Self),
    {
        self.each_while(|value, key, collection| {
            iterator(value, key, collection);
            ControlFlow::Continue(())
        });
    }

    /// Number of elements
    fn size(&self) -> usize {
        let mut count = 0;
        self.each(|_, _, _| count += 1);
        count
    }
}

/// Call `iterator(value, key, collection)` for every element
pub fn each<C, F>(collection: &C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, &C::Key, &C),
{
    collection.each(iterator);
}

// ============================================================================
// SEQUENCES
// ============================================================================

impl<T> Collection for [T] {
    type Key = usize;
    type Item = T;

    fn each_while<F>(&self, mut iterator: F)
    where
        F: FnMut(&T, &usize, &Self) -> ControlFlow<()>,
    {
        for (index, value) in self.iter().enumerate() {
            if iterator(value, &index, self).is_break() {
                break;
            }
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key = usize;
    type Item = T;

    fn each_while<F>(&self, mut iterator: F)
    where
        F: FnMut(&T, &usize, &Self) -> ControlFlow<()>,
    {
        for (index, value) in self.iter().enumerate() {
            if iterator(value, &index, self).is_break() {
                break;
            }
        }
    }

    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Key = usize;
    type Item = T;

    fn each_while<F>(&self, mut iterator: F)
    where
        F: FnMut(&T, &usize, &Self) -> ControlFlow<()>,
    {
        for (index, value) in self.iter().enumerate() {
            if iterator(value, &index, self).is_break() {
                break;
            }
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// MAPPINGS
// ============================================================================

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Key = K;
    type Item = V;

    fn each_while<F>(&self, mut iterator: F)
    where
        F: FnMut(&V, &K, &Self) -> ControlFlow<()>,
    {
        for (key, value) in self.iter() {
            if iterator(value, key, self).is_break() {
                break;
            }
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Key = K;
    type Item = V;

    fn each_while<F>(&self, mut iterator: F)
    where
        F: FnMut(&V, &K, &Self) -> ControlFlow<()>,
    {
        for (key, value) in self.iter() {
            if iterator(value, key, self).is_break() {
                break;
            }
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}
