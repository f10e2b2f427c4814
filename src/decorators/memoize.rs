//! Per-argument result cache.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use super::Decorator;

/// Caches `func(arg)` by argument
///
/// The cache only grows; nothing is ever evicted.
pub struct Memoize<F, A, R> {
    func: F,
    cache: HashMap<A, R>,
}

/// Wrap a single-argument function with an unbounded cache
pub fn memoize<F, A, R>(func: F) -> Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Hash + Eq,
    R: Clone,
{
    Memoize {
        func,
        cache: HashMap::new(),
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Hash + Eq,
    R: Clone,
{
    /// Return the cached result for `arg`, computing it on first sight
    pub fn call(&mut self, arg: A) -> R {
        if let Some(hit) = self.cache.get(&arg) {
            trace!("memoize: cache hit");
            return hit.clone();
        }

        trace!("memoize: cache miss, invoking wrapped function");
        let result = (self.func)(&arg);
        self.cache.insert(arg, result.clone());
        result
    }
}

impl<F, A, R> Decorator for Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Hash + Eq,
    R: Clone,
{
    type Args = A;
    type Output = R;

    fn call(&mut self, arg: A) -> R {
        Memoize::call(self, arg)
    }
}
