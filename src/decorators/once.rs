//! Run-once wrapper.

use std::marker::PhantomData;

use tracing::trace;

use super::Decorator;

/// Invokes its function on the first call only
pub struct Once<F, A, R> {
    func: F,
    result: Option<R>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so it runs at most once
///
/// Every call after the first returns the first result, whatever the
/// arguments.
pub fn once<F, A, R>(func: F) -> Once<F, A, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    Once {
        func,
        result: None,
        _args: PhantomData,
    }
}

impl<F, A, R> Once<F, A, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Run the function on the first call; replay its result afterwards
    pub fn call(&mut self, args: A) -> R {
        if self.result.is_some() {
            trace!("once: returning cached result");
        }
        let func = &mut self.func;
        self.result
            .get_or_insert_with(|| {
                trace!("once: invoking wrapped function");
                func(args)
            })
            .clone()
    }
}

impl<F, A, R> Decorator for Once<F, A, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    type Args = A;
    type Output = R;

    fn call(&mut self, args: A) -> R {
        Once::call(self, args)
    }
}
