use services::{QuizEngine, QuizSummary, SessionEngine, SessionError};
use tracing::info;

use crate::context::AppContext;
use crate::error::UiError;
use crate::input;
use crate::render;
use crate::style::LearnStyle;
use crate::vm::quiz_verdict;

/// Run one shuffled pass over `engine`'s questions.
///
/// Returns `None` when the quiz has no questions.
///
/// # Errors
///
/// Returns `UiError::InputClosed` on end-of-file or `UiError::Io` if the
/// terminal fails.
pub fn run_quiz(
    ctx: &mut AppContext<'_>,
    engine: &QuizEngine,
) -> Result<Option<QuizSummary>, UiError> {
    let mut session = match engine.start(&mut ctx.rng) {
        Ok(session) => session,
        Err(SessionError::Empty) => {
            render::error(ctx.console, &format!("{} has no questions yet.", engine.name()))?;
            input::wait_for_enter(ctx.console)?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let total = session.progress().total;
    render::narrator(ctx.console, &format!("Starting Quiz: {}", engine.name()))?;
    render::info(ctx.console, &format!("Total Questions: {total}"))?;
    input::wait_for(ctx.console, "Press Enter to begin...")?;

    while let Some(question) = session.current() {
        let number = session.progress().answered + 1;
        ctx.console.clear()?;
        render::header(ctx.console, &format!("Question {number} of {total}"))?;
        render::blank(ctx.console)?;
        ctx.console.write_line(&question.question().body().to_string())?;
        render::blank(ctx.console)?;
        for (i, option) in question.options().iter().enumerate() {
            ctx.console
                .write_line(&format!("  [{}] {option}", i + 1).as_str().option().to_string())?;
        }
        render::blank(ctx.console)?;

        let options = question.options().len();
        let chosen = input::menu_choice(ctx.console, 1, options)? - 1;
        let answer = session.answer(chosen, &mut ctx.scores)?;

        if answer.is_correct {
            render::success(ctx.console, "Correct!")?;
        } else {
            render::error(
                ctx.console,
                &format!("Wrong! The correct answer was: {}", answer.correct_option),
            )?;
        }
        render::blank(ctx.console)?;
        if !answer.explanation.is_empty() {
            render::info(ctx.console, &format!("Explanation: {}", answer.explanation))?;
        }
        input::wait_for_enter(ctx.console)?;
    }

    let summary = session.summary();
    info!(
        quiz = %summary.name,
        correct = summary.correct,
        total = summary.total,
        "quiz finished"
    );

    ctx.console.clear()?;
    render::header(ctx.console, "Quiz Complete!")?;
    render::blank(ctx.console)?;
    render::info(
        ctx.console,
        &format!(
            "Your Score: {} / {} ({}%)",
            summary.correct, summary.total, summary.percentage
        ),
    )?;
    render::info(ctx.console, &format!("Points Earned: {}", summary.points))?;
    render::blank(ctx.console)?;
    render::narrator(ctx.console, quiz_verdict(summary.grade))?;
    input::wait_for_enter(ctx.console)?;
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use learn_core::model::{QUIZLET_FEATURE, QuizQuestion};
    use services::QuizGrade;

    use crate::views::test_harness::run_fresh;

    fn single_option_quiz() -> QuizEngine {
        let questions = vec![
            QuizQuestion::new("One", "Pick the only option", ["only"], 0, "There was one.").unwrap(),
            QuizQuestion::new("Two", "Pick it again", ["still only"], 0, "").unwrap(),
        ];
        QuizEngine::new("Tiny", questions)
    }

    #[test]
    fn full_run_awards_points_and_verdict() {
        // begin, (answer, continue) x2, final continue
        let lines = ["", "1", "", "1", "", ""];
        let run = run_fresh(&lines, |ctx| run_quiz(ctx, &single_option_quiz()));

        let summary = run.value.unwrap().unwrap();
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.grade, QuizGrade::Excellent);
        assert_eq!(run.scores.feature_score(QUIZLET_FEATURE), 200);

        let out = run.console.output();
        assert!(out.contains("Question 1 of 2"));
        assert!(out.contains("Explanation: There was one."));
        assert!(out.contains("Your Score: 2 / 2 (100%)"));
        assert!(out.contains(quiz_verdict(QuizGrade::Excellent)));
    }

    #[test]
    fn wrong_answer_reveals_correct_option() {
        let quiz = QuizEngine::new(
            "Pair",
            vec![QuizQuestion::new("Q", "Which?", ["right", "wrong"], 0, "").unwrap()],
        );
        // Options are never left in authored order, so "right" is shown second.
        let run = run_fresh(&["", "1", "", ""], |ctx| run_quiz(ctx, &quiz));

        let summary = run.value.unwrap().unwrap();
        assert_eq!(summary.correct, 0);
        assert!(run.console.output().contains("Wrong! The correct answer was: right"));
        assert!(run.console.output().contains(quiz_verdict(QuizGrade::Poor)));
    }

    #[test]
    fn empty_quiz_is_reported_not_run() {
        let quiz = QuizEngine::new("Nothing", Vec::new());
        let run = run_fresh(&[""], |ctx| run_quiz(ctx, &quiz));

        assert!(run.value.unwrap().is_none());
        assert!(run.console.output().contains("Nothing has no questions yet."));
    }

    #[test]
    fn eof_mid_quiz_keeps_points_earned() {
        let run = run_fresh(&["", "1"], |ctx| run_quiz(ctx, &single_option_quiz()));

        assert!(matches!(run.value, Err(UiError::InputClosed)));
        assert_eq!(run.scores.feature_score(QUIZLET_FEATURE), 100);
    }
}
