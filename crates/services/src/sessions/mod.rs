mod code_trainer;
mod progress;
mod quiz;

use crate::error::SessionError;
use crate::score_service::ScoreService;

// Public API of the session subsystem.
pub use code_trainer::{
    CODE_POINTS_PER_CORRECT, CodeTrainerGrade, CodeTrainerSession, CodeTrainerSummary,
    ExerciseOutcome, SessionEnd,
};
pub use progress::SessionProgress;
pub use quiz::{
    QUIZ_POINTS_PER_CORRECT, QuizAnswer, QuizEngine, QuizGrade, QuizSession, QuizSummary,
    ShuffledQuestion,
};

/// Shape shared by every interactive training mode.
///
/// A session is built fresh for each run with its full unit sequence already
/// decided. The driver presents `current()`, feeds exactly one answer per unit
/// through `answer()`, and stops once `is_complete()` turns true, whether the
/// units ran out or the session ended early. Points go straight to the
/// `ScoreService` passed in; the session keeps its own counters for `summary()`.
pub trait SessionEngine {
    type Unit;
    type Answer;
    type Outcome;
    type Summary;

    /// The unit awaiting an answer, or `None` once the session is over.
    fn current(&self) -> Option<&Self::Unit>;

    /// Score one answer for the current unit and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when no unit is pending, or a
    /// mode-specific error for an answer that cannot be scored.
    fn answer(
        &mut self,
        answer: Self::Answer,
        scores: &mut ScoreService,
    ) -> Result<Self::Outcome, SessionError>;

    fn is_complete(&self) -> bool;

    fn progress(&self) -> SessionProgress;

    fn summary(&self) -> Self::Summary;
}
