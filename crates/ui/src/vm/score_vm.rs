use learn_core::model::PlayerScore;
use storage::ranking::rank_label;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub rank: String,
    pub player: String,
    pub total: u64,
    pub date: String,
}

/// Rows in the order given; callers pass them already ranked.
#[must_use]
pub fn map_score_rows(scores: &[PlayerScore]) -> Vec<ScoreRowVm> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| ScoreRowVm {
            rank: rank_label(i + 1),
            player: score.player_name().to_owned(),
            total: score.total_score(),
            date: format_datetime(score.date_of_playing()),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBreakdownVm {
    pub player: String,
    /// `(feature, points)`, highest first.
    pub features: Vec<(String, u32)>,
    pub total: u64,
}

impl From<&PlayerScore> for ScoreBreakdownVm {
    fn from(score: &PlayerScore) -> Self {
        let mut features: Vec<(String, u32)> = score
            .feature_scores()
            .iter()
            .map(|(name, points)| (name.clone(), *points))
            .collect();
        features.sort_by(|a, b| b.1.cmp(&a.1));
        Self {
            player: score.player_name().to_owned(),
            features,
            total: score.total_score(),
        }
    }
}
