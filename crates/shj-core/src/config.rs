//! Configuration for a collection engine.

/// Batch size the draw screen requests when none is configured.
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Configuration for a [`CollectionEngine`](crate::CollectionEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Number of draws made by [`draw_batch`](crate::CollectionEngine::draw_batch).
    pub batch_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the batch size (at least 1).
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }
}
