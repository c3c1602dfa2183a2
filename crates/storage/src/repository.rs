use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use learn_core::model::PlayerScore;
use thiserror::Error;

use crate::json::JsonScoreRepository;
use crate::ranking;

/// Errors surfaced by storage adapters.
///
/// Reads never produce one: an unreadable scoreboard is reported as empty.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to write scoreboard to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("scoreboard lock poisoned: {0}")]
    Poisoned(String),
}

/// Repository contract for the persisted scoreboard.
///
/// The scoreboard is an append-only list: each run adds one record and
/// never edits earlier ones. Queries re-read the whole collection.
pub trait ScoreRepository: Send + Sync {
    /// Read every persisted record in file order.
    ///
    /// Missing or malformed data yields an empty list.
    fn load(&self) -> Vec<PlayerScore>;

    /// Append one record and persist the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be written.
    fn append(&self, score: &PlayerScore) -> Result<(), StorageError>;

    /// Highest totals first; ties keep their stored order.
    fn top_n(&self, n: usize) -> Vec<PlayerScore> {
        ranking::top_n(self.load(), n)
    }

    /// Records for `player_name` (case-insensitive), newest first.
    fn history_for(&self, player_name: &str) -> Vec<PlayerScore> {
        ranking::history_for(self.load(), player_name)
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryScoreRepository {
    scores: Arc<Mutex<Vec<PlayerScore>>>,
}

impl InMemoryScoreRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing records, kept in the given order.
    #[must_use]
    pub fn with_scores(scores: Vec<PlayerScore>) -> Self {
        Self {
            scores: Arc::new(Mutex::new(scores)),
        }
    }
}

impl ScoreRepository for InMemoryScoreRepository {
    fn load(&self) -> Vec<PlayerScore> {
        self.scores
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn append(&self, score: &PlayerScore) -> Result<(), StorageError> {
        let mut guard = self
            .scores
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard.push(score.clone());
        Ok(())
    }
}

/// Scoreboard backend behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub scores: Arc<dyn ScoreRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            scores: Arc::new(InMemoryScoreRepository::new()),
        }
    }

    /// Scoreboard persisted as a JSON array at `path`.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            scores: Arc::new(JsonScoreRepository::new(path)),
        }
    }
}
