//! # Decorators
//!
//! Wrappers that change how a function is invoked.
//!
//! - `once` - run the first time, replay the result afterwards
//! - `memoize` - cache results per argument, forever
//! - `delay` - run once, later, through a `Timer`
//! - `throttle` - run at most once per window, measured on a `Clock`
//!
//! Each wrapper is a struct with private state and a `call` method. They
//! take `&mut self`, so a single instance cannot be raced by accident; wrap
//! one in [`Synchronized`] to share it between threads.

mod delay;
mod memoize;
mod once;
mod sync;
mod throttle;

pub use delay::delay;
pub use memoize::{memoize, Memoize};
pub use once::{once, Once};
pub use sync::Synchronized;
pub use throttle::{throttle, Throttle};

/// A wrapped callable with private state
pub trait Decorator {
    /// Arguments accepted by `call` (a tuple for several, `()` for none)
    type Args;

    type Output;

    fn call(&mut self, args: Self::Args) -> Self::Output;
}
