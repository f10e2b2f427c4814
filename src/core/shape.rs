//! # Array Shape Helpers
//!
//! Slicing, searching, ordering and combining sequences.
//!
//! ## Policies
//!
//! - Nothing here mutates its input. `sort_by` and `shuffle` return new
//!   vectors.
//! - Missing positions are `None`: `first`/`last` on empty input, `zip`
//!   past the end of a shorter sequence, `index_of` with no match.
//! - Set-like helpers (`intersection`, `difference`) compare with `==`
//!   through [`contains`] and keep the first sequence's order.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use rand::seq::SliceRandom;
use rand::Rng;

use super::collection::Collection;
use super::error::{Error, Result};
use super::fold::contains;
use super::transform::{filter, reject, Record};

// ============================================================================
// ENDS
// ============================================================================

/// The first element, if any
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The first `min(n, len)` elements
pub fn first_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[..n.min(sequence.len())]
}

/// The last element, if any
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The last `min(n, len)` elements
pub fn last_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[sequence.len() - n.min(sequence.len())..]
}

// ============================================================================
// SEARCH
// ============================================================================

/// Position of the first element equal to `target`
pub fn index_of<C>(sequence: &C, target: &C::Item) -> Option<usize>
where
    C: Collection<Key = usize> + ?Sized,
    C::Item: PartialEq,
{
    let mut found = None;

    sequence.each_while(|value, index, _| {
        if value == target {
            found = Some(*index);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    found
}

// ============================================================================
// SORTING
// ============================================================================

/// Stable ascending sort on `key_fn(element)`
///
/// Fails with [`Error::IncomparableKeys`] as soon as two derived keys turn
/// out to have no ordering.
pub fn sort_by<C, K, F>(collection: &C, mut key_fn: F) -> Result<Vec<C::Item>>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd,
    F: FnMut(&C::Item) -> K,
{
    let mut keys = Vec::with_capacity(collection.size());
    let mut items = Vec::with_capacity(collection.size());

    collection.each(|value, _, _| {
        keys.push(key_fn(value));
        items.push(Some(value.clone()));
    });

    let order = stable_order(&keys)?;

    Ok(order
        .into_iter()
        .filter_map(|position| items[position].take())
        .collect())
}

/// Stable ascending sort on `element[name]`
///
/// Elements missing the property sort before every element that has it.
pub fn sort_by_property<C>(collection: &C, name: &str) -> Result<Vec<C::Item>>
where
    C: Collection + ?Sized,
    C::Item: Clone + Record,
    <C::Item as Record>::Value: Clone + PartialOrd,
{
    sort_by(collection, |element| element.property(name).cloned())
}

/// Bottom-up merge sort over positions, taking the left run on ties
fn stable_order<K: PartialOrd>(keys: &[K]) -> Result<Vec<usize>> {
    let len = keys.len();
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        merged.clear();

        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j) = (start, mid);

            while i < mid && j < end {
                let (left, right) = (order[i], order[j]);
                match keys[left].partial_cmp(&keys[right]) {
                    Some(Ordering::Greater) => {
                        merged.push(right);
                        j += 1;
                    }
                    Some(_) => {
                        merged.push(left);
                        i += 1;
                    }
                    None => {
                        return Err(Error::IncomparableKeys {
                            left: left.min(right),
                            right: left.max(right),
                        })
                    }
                }
            }

            merged.extend_from_slice(&order[i..mid]);
            merged.extend_from_slice(&order[j..end]);
        }

        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    Ok(order)
}

// ============================================================================
// PAIRING
// ============================================================================

/// Group elements by position; shorter sequences contribute `None`
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = sequences.iter().map(|s| s.len()).max().unwrap_or(0);

    (0..longest)
        .map(|i| sequences.iter().map(|s| s.get(i).cloned()).collect())
        .collect()
}

/// Pair two sequences of different element types
pub fn zip2<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = a.len().max(b.len());

    (0..longest)
        .map(|i| (a.get(i).cloned(), b.get(i).cloned()))
        .collect()
}

// ============================================================================
// FLATTENING
// ============================================================================

/// A value or a list of nested values, to any depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(list: Vec<Nested<T>>) -> Self {
        Nested::List(list)
    }
}

/// Build a `Vec<Nested<_>>` from bracketed lists of expressions
///
/// A bracketed element becomes a nested list; anything else is an item.
///
/// ```
/// use underbar::{flatten, nested};
///
/// let tree = nested![1, [2, [3, [4]], 5]];
/// assert_eq!(flatten(&tree), vec![1, 2, 3, 4, 5]);
///
/// let signed = nested![-1, [2 * 3, [-4]]];
/// assert_eq!(flatten(&signed), vec![-1, 6, -4]);
/// ```
#[macro_export]
macro_rules! nested {
    (@munch [$($out:expr),*]) => {
        vec![$($out),*]
    };
    (@munch [$($out:expr),*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(
            @munch [$($out,)* $crate::Nested::List($crate::nested![$($inner)*])]
            $($($rest)*)?
        )
    };
    (@munch [$($out:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::nested!(@munch [$($out,)* $crate::Nested::Item($value)] $($($rest)*)?)
    };
    ($($elems:tt)*) => {
        $crate::nested!(@munch [] $($elems)*)
    };
}

/// Depth-first, left-to-right flattening
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    flatten_into(nested, &mut flat);
    flat
}

/// Flatten onto the end of `target`
pub fn flatten_into<'a, T: Clone>(nested: &[Nested<T>], target: &'a mut Vec<T>) -> &'a mut Vec<T> {
    nested.each(|element, _, _| match element {
        Nested::Item(value) => target.push(value.clone()),
        Nested::List(inner) => {
            flatten_into(inner, target);
        }
    });
    target
}

// ============================================================================
// SET-LIKE COMBINATION
// ============================================================================

/// Elements of the first sequence present in every other sequence
pub fn intersection<T: PartialEq + Clone>(sequences: &[&[T]]) -> Vec<T> {
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    filter(*head, |value| rest.iter().all(|other| contains(*other, value)))
}

/// Elements of `sequence` present in none of `others`
pub fn difference<T: PartialEq + Clone>(sequence: &[T], others: &[&[T]]) -> Vec<T> {
    reject(sequence, |value| {
        others.iter().any(|other| contains(*other, value))
    })
}

// ============================================================================
// SHUFFLING
// ============================================================================

/// A uniformly shuffled copy of `sequence`
pub fn shuffle<T: Clone, R: Rng + ?Sized>(sequence: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = sequence.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
