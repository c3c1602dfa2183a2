use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use learn_core::model::PlayerScore;
use tracing::{debug, info, warn};

use crate::repository::{ScoreRepository, StorageError};

/// Scoreboard stored as one pretty-printed JSON array.
///
/// Not safe against concurrent writers: `append` is a plain
/// read-modify-write of the whole file.
#[derive(Debug, Clone)]
pub struct JsonScoreRepository {
    path: PathBuf,
}

impl JsonScoreRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreRepository for JsonScoreRepository {
    fn load(&self) -> Vec<PlayerScore> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no scoreboard yet");
                return Vec::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "scoreboard unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<PlayerScore>>(&raw) {
            Ok(scores) => scores,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "scoreboard malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn append(&self, score: &PlayerScore) -> Result<(), StorageError> {
        let mut scores = self.load();
        scores.push(score.clone());

        let json = serde_json::to_string_pretty(&scores)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }
        fs::write(&self.path, json).map_err(|e| self.write_error(e))?;

        info!(
            path = %self.path.display(),
            player = score.player_name(),
            total = score.total_score(),
            records = scores.len(),
            "score saved"
        );
        Ok(())
    }
}
