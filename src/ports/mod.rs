//! # Ports
//!
//! Trait contracts for the collaborators the decorators depend on.
//!
//! - `Clock` - read current monotonic time (used by `throttle`)
//! - `Timer` - run a task after a delay, hand back a cancellable handle
//!   (used by `delay`)
//!
//! Randomness needs no port of its own: `shuffle` takes any `rand::Rng`.

use std::sync::Arc;
use std::time::Duration;

/// Monotonic time source
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Deferred unit of work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a scheduled task
pub trait TimerHandle {
    /// Prevent the task from running if it has not started yet
    fn cancel(&self);

    fn is_cancelled(&self) -> bool;
}

/// One-shot task scheduler
pub trait Timer {
    type Handle: TimerHandle;

    /// Run `task` once, `after` from now
    fn schedule(&self, after: Duration, task: Task) -> Self::Handle;
}
