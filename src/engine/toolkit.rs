//! # Toolkit Engine
//!
//! The facade that wires collaborators to the decorators.
//!
//! This struct owns:
//! - a Clock (for `throttle`)
//! - a Timer (for `delay`)
//! - a seeded RNG (for `shuffle`)
//!
//! The pure transforms need none of this and are called directly.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::adapters::{SystemClock, ThreadTimer};
use crate::core::config::ToolkitConfig;
use crate::core::shape;
use crate::decorators::{self, Throttle};
use crate::ports::{Clock, Timer};

/// Collaborator-backed entry point for the stateful operations
pub struct Toolkit<T = ThreadTimer> {
    /// Configuration
    config: ToolkitConfig,

    /// Time source (Clock port)
    clock: Arc<dyn Clock>,

    /// Scheduler (Timer port)
    timer: T,

    /// Randomness source for shuffles
    rng: StdRng,
}

impl Toolkit<ThreadTimer> {
    /// Create a toolkit with default adapters
    ///
    /// Uses SystemClock and ThreadTimer.
    pub fn new(config: ToolkitConfig) -> Self {
        Self::with_adapters(config, Arc::new(SystemClock::new()), ThreadTimer::new())
    }
}

impl<T: Timer> Toolkit<T> {
    /// Create with custom adapters
    pub fn with_adapters(config: ToolkitConfig, clock: Arc<dyn Clock>, timer: T) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            clock,
            timer,
            rng,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// The clock handed to throttles built here
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// The timer used by `delay`
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Shuffled copy of `sequence` using the toolkit's RNG
    pub fn shuffle<V: Clone>(&mut self, sequence: &[V]) -> Vec<V> {
        shape::shuffle(sequence, &mut self.rng)
    }

    /// Throttle measured on the toolkit's clock
    pub fn throttle<F, A, R>(
        &self,
        func: F,
        window: Duration,
        args: A,
    ) -> Throttle<F, A, R, Arc<dyn Clock>>
    where
        F: FnMut(&A) -> R,
        R: Clone,
    {
        decorators::throttle(func, window, args, self.clock())
    }

    /// Delay through the toolkit's timer
    pub fn delay<F, A>(&self, func: F, wait: Duration, args: A) -> T::Handle
    where
        F: FnOnce(A) + Send + 'static,
        A: Send + 'static,
    {
        decorators::delay(&self.timer, func, wait, args)
    }
}
