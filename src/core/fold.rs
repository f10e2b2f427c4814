//! # Folding Core
//!
//! `reduce` is the single aggregation primitive. `contains`, `every` and
//! `some` are all expressed through it.
//!
//! The accumulator is always seeded explicitly. `reduce_default` seeds with
//! `A::default()` (0 for numeric accumulators); the "first element as seed"
//! convention is intentionally not offered.

use super::collection::Collection;

/// Fold every element into `initial` with `iterator(total, element)`
pub fn reduce<C, A, F>(collection: &C, mut iterator: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    let mut total = Some(initial);

    collection.each(|value, _, _| {
        total = total.take().map(|acc| iterator(acc, value));
    });

    total.expect("accumulator is restored after every step")
}

/// `reduce` seeded with `A::default()`
pub fn reduce_default<C, A, F>(collection: &C, iterator: F) -> A
where
    C: Collection + ?Sized,
    A: Default,
    F: FnMut(A, &C::Item) -> A,
{
    reduce(collection, iterator, A::default())
}

/// True iff some element equals `target`
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce(
        collection,
        |was_found, item| was_found || item == target,
        false,
    )
}

/// True iff `predicate` holds for every element (vacuously true when empty)
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(collection, |all, item| all && predicate(item), true)
}

/// `every` with the default truthiness check
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// True iff `predicate` holds for at least one element (false when empty)
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    !every(collection, |item| !predicate(item))
}

/// `some` with the default truthiness check
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, Truthy::is_truthy)
}

// ============================================================================
// TRUTHINESS
// ============================================================================

/// Default predicate for `every_truthy` / `some_truthy`
///
/// Zero, NaN, empty strings, `false` and `None` are falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
