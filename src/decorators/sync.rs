//! Opt-in locking for decorators shared across threads.
//!
//! The lock is held for the whole call, including the wrapped function, so
//! a `Synchronized<Once<..>>` runs its function exactly once even when the
//! first calls race. Calling the same wrapper from inside its own function
//! deadlocks.

use parking_lot::Mutex;

use super::Decorator;

/// A decorator behind a mutex, callable through `&self`
pub struct Synchronized<D> {
    inner: Mutex<D>,
}

impl<D: Decorator> Synchronized<D> {
    /// Put `decorator` behind a lock
    pub fn new(decorator: D) -> Self {
        Self {
            inner: Mutex::new(decorator),
        }
    }

    /// Call the wrapped decorator, holding the lock for the whole call
    pub fn call(&self, args: D::Args) -> D::Output {
        self.inner.lock().call(args)
    }

    /// Unwrap back into the bare decorator
    pub fn into_inner(self) -> D {
        self.inner.into_inner()
    }
}

impl<D: Decorator> From<D> for Synchronized<D> {
    fn from(decorator: D) -> Self {
        Self::new(decorator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ManualClock;
    use crate::decorators::{memoize, once, throttle};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_synchronized_once_across_threads() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let shared = Arc::new(Synchronized::new(once(move |n: usize| {
            counter.fetch_add(1, Ordering::SeqCst);
            n
        })));

        let workers: Vec<_> = (0..8)
            .map(|n| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || shared.call(n))
            })
            .collect();

        let results: Vec<usize> = workers.into_iter().map(|w| w.join().unwrap()).collect();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_synchronized_memoize_across_threads() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let shared = Arc::new(Synchronized::new(memoize(move |n: &u32| {
            counter.fetch_add(1, Ordering::SeqCst);
            n * 2
        })));

        let workers: Vec<_> = (0..8u32)
            .map(|i| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || shared.call(i % 2))
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_synchronized_throttle() {
        let clock = ManualClock::new();
        let shared: Synchronized<_> = throttle(|n: &i32| *n, Duration::from_secs(1), 7, clock).into();

        assert_eq!(shared.call(()), 7);
        assert_eq!(shared.call(()), 7);

        let mut bare = shared.into_inner();
        assert_eq!(bare.call(), 7);
    }
}
