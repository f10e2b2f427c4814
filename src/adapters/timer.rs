//! # Timer Adapters
//!
//! Implementations of the Timer port.
//!
//! - `ThreadTimer` - one worker thread per task, sleeping on a condvar so a
//!   cancel wakes it immediately
//! - `ManualTimer` - a queue drained by `advance`, driven by its own
//!   `ManualClock`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::debug;

use super::clock::ManualClock;
use crate::ports::{Clock, Task, Timer, TimerHandle};

// ============================================================================
// THREAD TIMER
// ============================================================================

/// Timer backed by OS threads
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadTimer;

impl ThreadTimer {
    /// A timer that spawns one worker per scheduled task
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Default)]
struct Slot {
    cancelled: bool,
    fired: bool,
}

/// Handle to a task running on a `ThreadTimer`
#[derive(Debug)]
pub struct ThreadHandle {
    slot: Arc<(Mutex<Slot>, Condvar)>,
    worker: JoinHandle<()>,
}

impl ThreadHandle {
    /// Wait for the worker to finish; true if the task ran to completion
    pub fn join(self) -> bool {
        let completed = self.worker.join().is_ok();
        completed && self.slot.0.lock().fired
    }

    /// Whether the worker thread has exited
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }
}

impl TimerHandle for ThreadHandle {
    fn cancel(&self) {
        let (lock, signal) = &*self.slot;
        let mut slot = lock.lock();
        if !slot.fired {
            slot.cancelled = true;
            debug!("delayed task cancelled");
        }
        signal.notify_all();
    }

    fn is_cancelled(&self) -> bool {
        self.slot.0.lock().cancelled
    }
}

impl Timer for ThreadTimer {
    type Handle = ThreadHandle;

    fn schedule(&self, after: Duration, task: Task) -> ThreadHandle {
        let slot = Arc::new((Mutex::new(Slot::default()), Condvar::new()));
        // None when the wait runs past what Instant can represent
        let deadline = Instant::now().checked_add(after);
        debug!(delay_ms = after.as_millis(), "delayed task scheduled");

        let shared = Arc::clone(&slot);
        let worker = thread::spawn(move || {
            let (lock, signal) = &*shared;
            let mut state = lock.lock();

            match deadline {
                Some(deadline) => {
                    while !state.cancelled {
                        if signal.wait_until(&mut state, deadline).timed_out() {
                            break;
                        }
                    }
                }
                None => {
                    while !state.cancelled {
                        signal.wait(&mut state);
                    }
                }
            }

            if state.cancelled {
                return;
            }
            state.fired = true;
            drop(state);

            debug!("delayed task firing");
            task();
        });

        ThreadHandle { slot, worker }
    }
}

// ============================================================================
// MANUAL TIMER
// ============================================================================

struct Entry {
    due: Duration,
    seq: u64,
    task: Task,
    cancelled: Arc<AtomicBool>,
}

#[derive(Default)]
struct Queue {
    entries: Vec<Entry>,
    next_seq: u64,
}

/// Deterministic timer; tasks run only inside `advance`
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: ManualClock,
    queue: Arc<Mutex<Queue>>,
}

/// Handle to a task queued on a `ManualTimer`
#[derive(Debug, Clone)]
pub struct ManualHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle for ManualHandle {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl ManualTimer {
    /// An empty queue with its clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// The clock this timer's deadlines are measured on
    pub fn clock(&self) -> ManualClock {
        self.clock.clone()
    }

    /// Number of queued tasks not yet run or discarded
    pub fn pending(&self) -> usize {
        self.queue.lock().entries.len()
    }

    /// Move time forward and run every task that came due, in deadline
    /// order. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        self.clock.advance(by);
        let now = self.clock.now();

        let mut due: Vec<Entry> = {
            let mut queue = self.queue.lock();
            let (ready, waiting): (Vec<_>, Vec<_>) =
                queue.entries.drain(..).partition(|entry| entry.due <= now);
            queue.entries = waiting;
            ready
        };
        due.sort_by_key(|entry| (entry.due, entry.seq));

        let mut ran = 0;
        for entry in due {
            if entry.cancelled.load(Ordering::SeqCst) {
                continue;
            }
            (entry.task)();
            ran += 1;
        }
        ran
    }
}

impl Clock for ManualTimer {
    fn now(&self) -> Duration {
        self.clock.now()
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn schedule(&self, after: Duration, task: Task) -> ManualHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut queue = self.queue.lock();
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.entries.push(Entry {
            due: self.clock.now().saturating_add(after),
            seq,
            task,
            cancelled: Arc::clone(&cancelled),
        });
        ManualHandle { cancelled }
    }
}
