//! High-score persistence.

mod json_file;

pub use json_file::{HighScoreRecord, JsonFileStore};

use crate::error::StoreError;

/// Durable home of the high score.
pub trait HighScoreStore {
    /// Read the stored high score. A store with nothing saved yet returns 0.
    fn load(&self) -> Result<u32, StoreError>;

    /// Replace the stored high score.
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Load the high score, treating any failure as "no high score yet".
pub fn load_or_zero(store: &dyn HighScoreStore) -> u32 {
    match store.load() {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!("could not load high score, starting from 0: {e}");
            0
        }
    }
}

/// Save the high score, logging and dropping any failure.
pub fn save_or_warn(store: &mut dyn HighScoreStore, score: u32) {
    match store.save(score) {
        Ok(()) => tracing::info!(score, "high score saved"),
        Err(e) => tracing::warn!("could not save high score {score}: {e}"),
    }
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    high_score: u32,
    saves: usize,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        MemoryStore {
            high_score,
            saves: 0,
        }
    }

    /// Number of successful `save` calls
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        Ok(self.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.high_score = score;
        self.saves += 1;
        Ok(())
    }
}
