use crate::context::AppContext;
use crate::error::UiError;
use crate::input;
use crate::render;
use crate::vm::{ScoreBreakdownVm, map_score_rows};

/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn show_leaderboard(ctx: &mut AppContext<'_>) -> Result<(), UiError> {
    let top = ctx.scores.top_scores(ctx.leaderboard_size);
    ctx.console.clear()?;
    render::scoreboard(
        ctx.console,
        &format!("Top {} Leaderboard", ctx.leaderboard_size),
        &map_score_rows(&top),
    )?;
    input::wait_for_enter(ctx.console)
}

/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn show_current_session(ctx: &mut AppContext<'_>) -> Result<(), UiError> {
    let breakdown = ScoreBreakdownVm::from(ctx.scores.current());
    ctx.console.clear()?;
    render::session_summary(ctx.console, &breakdown)?;
    input::wait_for_enter(ctx.console)
}

/// Saved records for the current player, newest first.
///
/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn show_history(ctx: &mut AppContext<'_>) -> Result<(), UiError> {
    let history = ctx.scores.player_history();
    let title = format!("Score History - {}", ctx.scores.player_name());
    ctx.console.clear()?;
    render::scoreboard(ctx.console, &title, &map_score_rows(&history))?;
    input::wait_for_enter(ctx.console)
}
