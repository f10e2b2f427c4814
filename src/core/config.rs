//! # Configuration
//!
//! Settings consumed by [`crate::engine::Toolkit`].

/// Toolkit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolkitConfig {
    /// Seed for the shuffle RNG; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl ToolkitConfig {
    /// Default configuration (entropy-seeded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproducible shuffles from a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
