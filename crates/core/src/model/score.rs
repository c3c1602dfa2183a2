use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name recorded when the player declines to give one.
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Feature key for points earned in quizzes.
pub const QUIZLET_FEATURE: &str = "Quizlet";
/// Feature key for points earned in the live code trainer.
pub const CODE_TRAINING_FEATURE: &str = "CodeTraining";

/// Points earned by one player during one run, keyed by feature.
///
/// The same shape is used for the live, in-memory record and for every
/// persisted scoreboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    player_name: String,
    #[serde(default)]
    feature_scores: BTreeMap<String, u32>,
    date_of_playing: DateTime<Utc>,
}

impl PlayerScore {
    /// Start an empty record. A blank name falls back to [`DEFAULT_PLAYER_NAME`].
    #[must_use]
    pub fn new(player_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let mut score = Self {
            player_name: String::new(),
            feature_scores: BTreeMap::new(),
            date_of_playing: now,
        };
        score.set_player_name(player_name);
        score
    }

    #[must_use]
    pub fn anonymous(now: DateTime<Utc>) -> Self {
        Self::new(DEFAULT_PLAYER_NAME, now)
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        let trimmed = name.trim();
        self.player_name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_owned()
        } else {
            trimmed.to_owned()
        };
    }

    #[must_use]
    pub fn feature_scores(&self) -> &BTreeMap<String, u32> {
        &self.feature_scores
    }

    #[must_use]
    pub fn date_of_playing(&self) -> DateTime<Utc> {
        self.date_of_playing
    }

    /// Sum of all feature scores.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.feature_scores.values().map(|&v| u64::from(v)).sum()
    }

    #[must_use]
    pub fn feature_score(&self, feature: &str) -> u32 {
        self.feature_scores.get(feature).copied().unwrap_or(0)
    }

    pub fn add_score(&mut self, feature: &str, points: u32) {
        let entry = self.feature_scores.entry(feature.to_owned()).or_insert(0);
        *entry = entry.saturating_add(points);
    }

    /// Subtract points from a feature, never going below zero.
    ///
    /// Features that were never scored are left untouched.
    pub fn remove_score(&mut self, feature: &str, points: u32) {
        if let Some(value) = self.feature_scores.get_mut(feature) {
            *value = value.saturating_sub(points);
        }
    }

    pub fn reset(&mut self) {
        self.feature_scores.clear();
    }

    /// Set the timestamp recorded with this entry.
    pub fn stamp(&mut self, at: DateTime<Utc>) {
        self.date_of_playing = at;
    }
}
