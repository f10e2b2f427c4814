//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! - Clock adapters: System, Manual
//! - Timer adapters: Thread, Manual
//!
//! The manual adapters make time-dependent behaviour deterministic in
//! tests; the system ones are what the engine uses by default.

pub mod clock;
pub mod timer;

pub use clock::{ManualClock, SystemClock};
pub use timer::{ManualHandle, ManualTimer, ThreadHandle, ThreadTimer};
