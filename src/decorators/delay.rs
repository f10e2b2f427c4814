//! Deferred one-shot invocation.

use std::time::Duration;

use crate::ports::Timer;

/// Schedule `func(args)` to run once, `wait` from now
///
/// Returns immediately with the timer's handle; cancelling it before the
/// deadline means `func` never runs.
pub fn delay<T, F, A>(timer: &T, func: F, wait: Duration, args: A) -> T::Handle
where
    T: Timer + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    timer.schedule(wait, Box::new(move || func(args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ManualTimer, ThreadTimer};
    use crate::ports::TimerHandle;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_delay_passes_bound_arguments() {
        let timer = ManualTimer::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        delay(
            &timer,
            move |(a, b): (&'static str, &'static str)| sink.lock().push(format!("{a}{b}")),
            Duration::from_millis(500),
            ("a", "b"),
        );

        timer.advance(Duration::from_millis(499));
        assert!(seen.lock().is_empty());

        timer.advance(Duration::from_millis(1));
        assert_eq!(*seen.lock(), vec!["ab".to_string()]);
    }

    #[test]
    fn test_delay_runs_only_once() {
        let timer = ManualTimer::new();
        let hits = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&hits);
        delay(&timer, move |()| *counter.lock() += 1, Duration::from_millis(10), ());

        timer.advance(Duration::from_millis(10));
        timer.advance(Duration::from_millis(10));
        timer.advance(Duration::from_millis(10));

        assert_eq!(*hits.lock(), 1);
    }

    #[test]
    fn test_delay_cancelled() {
        let timer = ManualTimer::new();
        let hits = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&hits);
        let handle = delay(&timer, move |()| *counter.lock() += 1, Duration::from_millis(10), ());
        handle.cancel();

        timer.advance(Duration::from_secs(1));
        assert_eq!(*hits.lock(), 0);
    }

    #[test]
    fn test_delay_far_future_does_not_panic() {
        let hits = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&hits);
        let handle = delay(&ThreadTimer::new(), move |()| *counter.lock() += 1, Duration::MAX, ());
        handle.cancel();
        assert!(!handle.join());

        let timer = ManualTimer::new();
        timer.advance(Duration::from_millis(1));
        let counter = Arc::clone(&hits);
        delay(&timer, move |()| *counter.lock() += 1, Duration::MAX, ());
        timer.advance(Duration::MAX);

        assert_eq!(*hits.lock(), 0);
    }

    #[test]
    fn test_delay_does_not_block_caller() {
        let hits = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&hits);

        let handle = delay(
            &ThreadTimer::new(),
            move |n: i32| *counter.lock() += n,
            Duration::from_millis(20),
            5,
        );
        assert_eq!(*hits.lock(), 0);

        assert!(handle.join());
        assert_eq!(*hits.lock(), 5);
    }
}
