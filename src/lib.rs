//! # underbar - Collection Transforms and Function Decorators
//!
//! > "Two primitives, everything else is composition"
//!
//! underbar is a utility layer of generic collection transforms and function
//! decorators. Every transform is built on one traversal primitive (`each`)
//! and one folding primitive (`reduce`); the decorators add run-once,
//! per-argument caching, deferred and rate-limited invocation.
//!
//! ## Philosophy
//!
//! - **Compose, don't re-traverse** - every operation goes through `each`
//! - **Inputs are read-only** - transforms return new vectors
//! - **State stays private** - decorators expose only their return values
//! - **Pure core, swappable adapters** - clocks and timers sit behind ports
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UNDERBAR                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure, no time, no threads)                           │
//! │    each, reduce, map/filter, shape helpers, merge           │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Clock, Timer, TimerHandle                                │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Clock: System, Manual                                    │
//! │    Timer: Thread, Manual                                    │
//! │                                                              │
//! │  DECORATORS (private state, single call)                    │
//! │    once, memoize, delay, throttle, Synchronized             │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Toolkit - wires clock, timer and RNG from config         │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use underbar::{filter, map, reduce, uniq, memoize};
//!
//! let evens = filter(&[1, 2, 3, 4], |n| n % 2 == 0);
//! let squares = map(&evens, |n| n * n);
//! assert_eq!(reduce(&squares, |total, n| total + n, 0), 20);
//!
//! assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
//!
//! let mut slow_double = memoize(|n: &u64| n * 2);
//! assert_eq!(slow_double.call(21), 42);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure collection logic
/// Contains: Collection, reduce, transforms, shape helpers, merge, errors
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Clock, Timer, TimerHandle
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: clock, timer submodules
pub mod adapters;

/// Decorators - stateful function wrappers
/// Contains: Once, Memoize, Throttle, delay, Synchronized
pub mod decorators;

/// Engine - orchestration layer
/// Contains: Toolkit main struct
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core operations
pub use crate::core::collection::{each, Collection};
pub use crate::core::fold::{
    contains, every, every_truthy, reduce, reduce_default, some, some_truthy, Truthy,
};
pub use crate::core::merge::{defaults, defaults_nullable, extend, Mapping};
pub use crate::core::shape::{
    difference, first, first_n, flatten, flatten_into, index_of, intersection, last, last_n,
    shuffle, sort_by, sort_by_property, zip, zip2, Nested,
};
pub use crate::core::transform::{
    filter, invoke, invoke_with, map, pluck, reject, uniq, uniq_by_display, Methods, Record,
};
pub use crate::core::config::ToolkitConfig;
pub use crate::core::error::{Error, Result};

// Port traits
pub use crate::ports::{Clock, Task, Timer, TimerHandle};

// Adapters
pub use crate::adapters::{ManualClock, ManualTimer, SystemClock, ThreadTimer};

// Decorators
pub use crate::decorators::{
    delay, memoize, once, throttle, Decorator, Memoize, Once, Synchronized, Throttle,
};

// Engine
pub use crate::engine::Toolkit;
