use learn_core::model::ProgrammingLanguage;
use services::{CodeTrainerSession, CodeTrainerSummary, ExerciseOutcome, SessionEngine};
use tracing::info;

use crate::context::AppContext;
use crate::error::UiError;
use crate::input;
use crate::render;
use crate::style::LearnStyle;
use crate::vm::{code_trainer_verdict, hardmode_reaction};

fn show_outcome(ctx: &mut AppContext<'_>, outcome: &ExerciseOutcome) -> Result<(), UiError> {
    if outcome.is_correct {
        render::success(
            ctx.console,
            "Correct! ...I suppose even you can get lucky sometimes.",
        )?;
        if let Some(feedback) = &outcome.feedback {
            render::info(ctx.console, feedback)?;
        }
        return Ok(());
    }

    if outcome.ended_session {
        render::narrator(ctx.console, "WRONG! Hardmode doesn't forgive. Game Over.")?;
    } else {
        render::error(
            ctx.console,
            "Wrong! Study more, code less... or maybe code more, I don't know.",
        )?;
    }
    if let Some(feedback) = &outcome.feedback {
        render::info(ctx.console, feedback)?;
    }

    render::blank(ctx.console)?;
    render::boxed(ctx.console, "Correct Example", &outcome.correct_example)?;
    if !outcome.submitted.trim().is_empty() {
        render::blank(ctx.console)?;
        render::comparison(
            ctx.console,
            ("Your Answer", outcome.submitted.trim()),
            ("Correct Answer", &outcome.correct_example),
        )?;
    }
    Ok(())
}

/// Walk the player through every exercise of `language`, asking once for
/// hardmode first.
///
/// Returns `None` when the language has no exercises.
///
/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn run_code_training(
    ctx: &mut AppContext<'_>,
    language: &ProgrammingLanguage,
) -> Result<Option<CodeTrainerSummary>, UiError> {
    ctx.console.clear()?;
    render::header(ctx.console, &format!("Live Code Training - {}", language.name()))?;
    if language.exercises().is_empty() {
        render::error(
            ctx.console,
            &format!("No {} exercises are available yet.", language.name()),
        )?;
        input::wait_for_enter(ctx.console)?;
        return Ok(None);
    }

    let hardmode = input::yes_no(
        ctx.console,
        "Enable Hardmode? (One mistake and you're out)",
    )?;
    render::narrator(ctx.console, hardmode_reaction(hardmode))?;
    input::wait_for_enter(ctx.console)?;

    let mut session = CodeTrainerSession::new(language, hardmode)?;
    while let Some(exercise) = session.current() {
        ctx.console.clear()?;
        render::header(ctx.console, exercise.name())?;
        ctx.console
            .write_line(&exercise.description().body().to_string())?;
        render::blank(ctx.console)?;
        render::info(
            ctx.console,
            "Write your code below. Submit with an empty line (press Enter twice):",
        )?;
        render::blank(ctx.console)?;

        let code = input::multiline(ctx.console)?;
        let outcome = session.answer(code, &mut ctx.scores)?;
        render::blank(ctx.console)?;
        show_outcome(ctx, &outcome)?;
        if !outcome.ended_session {
            input::wait_for_enter(ctx.console)?;
        }
    }

    let summary = session.summary();
    info!(
        language = %summary.language,
        hardmode = summary.hardmode,
        score = summary.score,
        attempted = summary.attempted,
        "code training finished"
    );

    ctx.console.clear()?;
    render::header(ctx.console, "Session Complete")?;
    render::blank(ctx.console)?;
    render::info(ctx.console, &format!("Session Score: {}", summary.score))?;
    render::blank(ctx.console)?;
    render::narrator(ctx.console, code_trainer_verdict(summary.grade))?;
    input::wait_for_enter(ctx.console)?;
    Ok(Some(summary))
}
