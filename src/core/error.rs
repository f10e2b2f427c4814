//! # Errors
//!
//! Runtime failures of the transform layer.
//!
//! Most misuse (missing arguments, non-callables, non-collections) is a
//! compile error. What remains are the checks the type system cannot do:
//! dispatch by method name and comparison of derived sort keys.

use thiserror::Error;

/// Errors surfaced by the transform layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `invoke` named a method the element does not provide
    #[error("unknown method: {name}")]
    UnknownMethod { name: String },

    /// Two derived sort keys have no ordering (e.g. a NaN key)
    #[error("incomparable sort keys at positions {left} and {right}")]
    IncomparableKeys { left: usize, right: usize },
}

/// Result alias for transform operations
pub type Result<T> = std::result::Result<T, Error>;
