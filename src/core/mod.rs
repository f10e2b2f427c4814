//! # Core
//!
//! Pure collection logic. No clocks, no timers, no shared state.
//!
//! Everything is layered on two primitives:
//! - [`collection::Collection::each`] - traversal
//! - [`fold::reduce`] - aggregation

pub mod collection;
pub mod config;
pub mod error;
pub mod fold;
pub mod merge;
pub mod shape;
pub mod transform;

pub use collection::{each, Collection};
pub use error::{Error, Result};
pub use fold::{contains, every, every_truthy, reduce, reduce_default, some, some_truthy, Truthy};
pub use merge::{defaults, defaults_nullable, extend, Mapping};
pub use shape::{
    difference, first, first_n, flatten, flatten_into, index_of, intersection, last, last_n,
    shuffle, sort_by, sort_by_property, zip, zip2, Nested,
};
pub use transform::{
    filter, invoke, invoke_with, map, pluck, reject, uniq, uniq_by_display, Methods, Record,
};
