//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Configuration is applied
//! - Adapters are connected to ports
//! - The stateful operations (shuffle, throttle, delay) get their
//!   collaborators

mod toolkit;

pub use toolkit::Toolkit;
