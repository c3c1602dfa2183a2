//! Pure queries over a loaded scoreboard.

use learn_core::model::PlayerScore;

/// Sort by total descending and keep the first `n`.
///
/// `sort_by` is stable, so equal totals keep their original relative order.
#[must_use]
pub fn top_n(mut scores: Vec<PlayerScore>, n: usize) -> Vec<PlayerScore> {
    scores.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
    scores.truncate(n);
    scores
}

/// Keep records whose name matches `player_name` ignoring case, newest first.
#[must_use]
pub fn history_for(scores: Vec<PlayerScore>, player_name: &str) -> Vec<PlayerScore> {
    let needle = player_name.trim().to_lowercase();
    let mut matching: Vec<PlayerScore> = scores
        .into_iter()
        .filter(|s| s.player_name().trim().to_lowercase() == needle)
        .collect();
    matching.sort_by(|a, b| b.date_of_playing().cmp(&a.date_of_playing()));
    matching
}

/// Ordinal label used on leaderboards: `1st`, `2nd`, `3rd`, then `Nth`.
#[must_use]
pub fn rank_label(rank: usize) -> String {
    match rank {
        1 => "1st".to_owned(),
        2 => "2nd".to_owned(),
        3 => "3rd".to_owned(),
        n => format!("{n}th"),
    }
}
