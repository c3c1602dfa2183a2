use std::sync::Arc;

use learn_core::Clock;
use learn_core::model::PlayerScore;
use storage::ScoreRepository;
use tracing::debug;

use crate::error::ScoreError;

/// Running score for the current run plus access to the persisted scoreboard.
///
/// One instance lives for the whole process. Sessions add points to it as
/// they are earned; `save_score` stamps and appends it exactly once.
#[derive(Clone)]
pub struct ScoreService {
    current: PlayerScore,
    repo: Arc<dyn ScoreRepository>,
    clock: Clock,
    saved: bool,
}

impl ScoreService {
    #[must_use]
    pub fn new(repo: Arc<dyn ScoreRepository>, clock: Clock) -> Self {
        Self {
            current: PlayerScore::anonymous(clock.now()),
            repo,
            clock,
            saved: false,
        }
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.current.set_player_name(name);
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        self.current.player_name()
    }

    #[must_use]
    pub fn current(&self) -> &PlayerScore {
        &self.current
    }

    pub fn add_score(&mut self, feature: &str, points: u32) {
        self.current.add_score(feature, points);
        debug!(feature, points, total = self.current.total_score(), "score added");
    }

    pub fn remove_score(&mut self, feature: &str, points: u32) {
        self.current.remove_score(feature, points);
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.current.total_score()
    }

    #[must_use]
    pub fn feature_score(&self, feature: &str) -> u32 {
        self.current.feature_score(feature)
    }

    /// Drop every point earned so far while keeping the player name.
    pub fn reset_session(&mut self) {
        self.current = PlayerScore::new(self.current.player_name(), self.clock.now());
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Stamp the current record and append it to the scoreboard.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::AlreadySaved` on a second call, or
    /// `ScoreError::Storage` if the scoreboard cannot be written.
    pub fn save_score(&mut self) -> Result<&PlayerScore, ScoreError> {
        if self.saved {
            return Err(ScoreError::AlreadySaved);
        }
        self.current.stamp(self.clock.now());
        self.repo.append(&self.current)?;
        self.saved = true;
        Ok(&self.current)
    }

    #[must_use]
    pub fn top_scores(&self, n: usize) -> Vec<PlayerScore> {
        self.repo.top_n(n)
    }

    /// Persisted records of the current player, newest first.
    #[must_use]
    pub fn player_history(&self) -> Vec<PlayerScore> {
        self.repo.history_for(self.current.player_name())
    }
}

impl std::fmt::Debug for ScoreService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreService")
            .field("current", &self.current)
            .field("clock", &self.clock)
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use learn_core::model::{CODE_TRAINING_FEATURE, QUIZLET_FEATURE};
    use learn_core::time::{fixed_clock, fixed_now};
    use storage::InMemoryScoreRepository;

    fn service() -> (ScoreService, InMemoryScoreRepository) {
        let repo = InMemoryScoreRepository::new();
        let svc = ScoreService::new(Arc::new(repo.clone()), fixed_clock());
        (svc, repo)
    }

    #[test]
    fn accumulates_and_clamps() {
        let (mut svc, _) = service();
        svc.add_score(QUIZLET_FEATURE, 100);
        svc.add_score(CODE_TRAINING_FEATURE, 200);
        svc.remove_score(CODE_TRAINING_FEATURE, 500);

        assert_eq!(svc.feature_score(CODE_TRAINING_FEATURE), 0);
        assert_eq!(svc.total_score(), 100);
    }

    #[test]
    fn save_happens_exactly_once() {
        let (mut svc, repo) = service();
        svc.set_player_name("Ada");
        svc.add_score(QUIZLET_FEATURE, 300);

        let saved = svc.save_score().unwrap().clone();
        assert_eq!(saved.date_of_playing(), fixed_now());
        assert!(matches!(svc.save_score(), Err(ScoreError::AlreadySaved)));
        assert_eq!(repo.load(), vec![saved]);
    }

    #[test]
    fn history_follows_current_player() {
        let mut earlier = PlayerScore::new("ada", fixed_now() - Duration::days(1));
        earlier.add_score(QUIZLET_FEATURE, 100);
        let repo = InMemoryScoreRepository::with_scores(vec![
            earlier.clone(),
            PlayerScore::new("Grace", fixed_now()),
        ]);
        let mut svc = ScoreService::new(Arc::new(repo), fixed_clock());
        svc.set_player_name("Ada");

        assert_eq!(svc.player_history(), vec![earlier]);
    }

    #[test]
    fn reset_keeps_player_name() {
        let (mut svc, _) = service();
        svc.set_player_name("Ada");
        svc.add_score(QUIZLET_FEATURE, 100);
        svc.reset_session();

        assert_eq!(svc.player_name(), "Ada");
        assert_eq!(svc.total_score(), 0);
    }
}
