use tracing::{error, info};

use crate::context::AppContext;
use crate::error::UiError;
use crate::input;
use crate::render;
use crate::vm::ScoreBreakdownVm;

/// Save the run's score, then show the summary and say goodbye.
///
/// # Errors
///
/// Returns `UiError::Score` if the score cannot be written, or
/// `UiError::Io` if the terminal fails. A closed input stream at the final
/// prompt is not an error.
pub fn finish_run(ctx: &mut AppContext<'_>) -> Result<(), UiError> {
    let saved = ctx.scores.save_score()?;
    info!(player = saved.player_name(), total = saved.total_score(), "run finished");
    let breakdown = ScoreBreakdownVm::from(saved);

    ctx.console.clear()?;
    render::session_summary(ctx.console, &breakdown)?;
    render::narrator(
        ctx.console,
        &format!(
            "Until next time, {}. Try not to forget everything you learned.",
            breakdown.player
        ),
    )?;
    match input::wait_for_enter(ctx.console) {
        Err(UiError::InputClosed) => Ok(()),
        other => other,
    }
}

/// Close the run with the result of play. End of input is a normal exit;
/// any other failure still saves the score before the error is returned.
///
/// # Errors
///
/// Returns the play error, or the save error if play ended cleanly.
pub fn end_run(ctx: &mut AppContext<'_>, played: Result<(), UiError>) -> Result<(), UiError> {
    match played {
        Ok(()) => finish_run(ctx),
        Err(UiError::InputClosed) => {
            info!("input closed, wrapping up");
            finish_run(ctx)
        }
        Err(err) => {
            if let Err(save_err) = ctx.scores.save_score() {
                error!(error = %save_err, "score not saved after terminal failure");
            }
            Err(err)
        }
    }
}
