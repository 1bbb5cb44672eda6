//! Best-score persistence contract.
//!
//! The engine only needs two operations, keyed by difficulty tier. Missing
//! entries read as "no score yet". A store that fails is dropped by the
//! engine for the rest of the session; best scores then live in memory only.

use std::collections::HashMap;

use crate::types::Difficulty;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("best-score storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored best scores are malformed: {0}")]
    Malformed(String),
}

/// Key-value storage for per-tier best scores.
pub trait BestScoreStore {
    /// Stored best score for a tier, `None` when absent.
    fn load_best_score(&mut self, difficulty: Difficulty) -> Result<Option<u32>, StoreError>;

    /// Overwrite the stored best score for a tier.
    fn save_best_score(&mut self, difficulty: Difficulty, score: u32) -> Result<(), StoreError>;
}

/// In-memory store. The default for tests and for sessions without storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scores: HashMap<Difficulty, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one tier's best score.
    pub fn with_score(difficulty: Difficulty, score: u32) -> Self {
        let mut store = Self::new();
        store.scores.insert(difficulty, score);
        store
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<u32> {
        self.scores.get(&difficulty).copied()
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best_score(&mut self, difficulty: Difficulty) -> Result<Option<u32>, StoreError> {
        Ok(self.get(difficulty))
    }

    fn save_best_score(&mut self, difficulty: Difficulty, score: u32) -> Result<(), StoreError> {
        self.scores.insert(difficulty, score);
        Ok(())
    }
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load_best_score(&mut self, difficulty: Difficulty) -> Result<Option<u32>, StoreError> {
        (**self).load_best_score(difficulty)
    }

    fn save_best_score(&mut self, difficulty: Difficulty, score: u32) -> Result<(), StoreError> {
        (**self).save_best_score(difficulty, score)
    }
}
