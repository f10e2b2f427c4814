//! Rate-limited invocation.
//!
//! Arguments are bound when the wrapper is built. `call` takes none, so
//! every actual invocation sees the same arguments.

use std::time::Duration;

use tracing::trace;

use super::Decorator;
use crate::ports::Clock;

/// Invokes its function at most once per window
pub struct Throttle<F, A, R, C> {
    func: F,
    args: A,
    window: Duration,
    clock: C,
    last: Option<(Duration, R)>,
}

/// Wrap `func(&args)` so it runs at most once per `window` on `clock`
///
/// The first call always runs. Calls inside the window return the previous
/// result without invoking `func`.
pub fn throttle<F, A, R, C>(func: F, window: Duration, args: A, clock: C) -> Throttle<F, A, R, C>
where
    F: FnMut(&A) -> R,
    R: Clone,
    C: Clock,
{
    Throttle {
        func,
        args,
        window,
        clock,
        last: None,
    }
}

impl<F, A, R, C> Throttle<F, A, R, C>
where
    F: FnMut(&A) -> R,
    R: Clone,
    C: Clock,
{
    /// Invoke with the bound arguments unless still inside the window
    pub fn call(&mut self) -> R {
        let now = self.clock.now();

        let cached = match &self.last {
            Some((at, result)) if now.saturating_sub(*at) < self.window => Some(result.clone()),
            _ => None,
        };
        if let Some(result) = cached {
            trace!("throttle: inside window, returning previous result");
            return result;
        }

        trace!("throttle: window open, invoking wrapped function");
        let result = (self.func)(&self.args);
        self.last = Some((now, result.clone()));
        result
    }
}

impl<F, A, R, C> Decorator for Throttle<F, A, R, C>
where
    F: FnMut(&A) -> R,
    R: Clone,
    C: Clock,
{
    type Args = ();
    type Output = R;

    fn call(&mut self, _: ()) -> R {
        Throttle::call(self)
    }
}
