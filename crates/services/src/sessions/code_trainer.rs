use std::panic::{self, AssertUnwindSafe};

use learn_core::model::{CODE_TRAINING_FEATURE, CodeExercise, ProgrammingLanguage, ValidationResult};
use tracing::{debug, warn};

use super::{SessionEngine, SessionProgress};
use crate::error::SessionError;
use crate::score_service::ScoreService;

pub const CODE_POINTS_PER_CORRECT: u32 = 100;

/// How a code-training session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every exercise was attempted.
    Completed,
    /// A wrong answer in hardmode cut the session short.
    HardmodeFailure,
}

/// Result of submitting code for one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseOutcome {
    pub exercise: String,
    pub is_correct: bool,
    pub feedback: Option<String>,
    pub submitted: String,
    pub correct_example: String,
    pub points: u32,
    /// Set when this answer ended the session early.
    pub ended_session: bool,
}

/// Verdict band for a finished code-training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTrainerGrade {
    HardmodeFailed,
    /// More than 300 points.
    Impressive,
    /// More than 100 points.
    Acceptable,
    Weak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTrainerSummary {
    pub language: String,
    pub hardmode: bool,
    pub score: u32,
    pub attempted: usize,
    pub correct: usize,
    pub total: usize,
    pub end: SessionEnd,
    pub grade: CodeTrainerGrade,
}

/// One pass over a language's exercises, in authored order.
#[derive(Debug, Clone)]
pub struct CodeTrainerSession {
    language: String,
    exercises: Vec<CodeExercise>,
    hardmode: bool,
    current: usize,
    correct: usize,
    score: u32,
    end: Option<SessionEnd>,
}

impl CodeTrainerSession {
    /// Start a session. `hardmode` is asked once, before the first exercise.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the language has no exercises.
    pub fn new(language: &ProgrammingLanguage, hardmode: bool) -> Result<Self, SessionError> {
        if language.exercises().is_empty() {
            return Err(SessionError::Empty);
        }
        debug!(language = language.name(), hardmode, "code training started");
        Ok(Self {
            language: language.name().to_owned(),
            exercises: language.exercises().to_vec(),
            hardmode,
            current: 0,
            correct: 0,
            score: 0,
            end: None,
        })
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn hardmode(&self) -> bool {
        self.hardmode
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn end(&self) -> Option<SessionEnd> {
        self.end
    }
}

/// Run a validator, turning a panic into an incorrect verdict.
///
/// The process panic hook still runs first, so the default hook prints the
/// panic message to stderr. Validators are built-in content; a panic there
/// is a content bug, not a player error.
fn run_validator(exercise: &CodeExercise, code: &str) -> ValidationResult {
    panic::catch_unwind(AssertUnwindSafe(|| exercise.validator().validate(code))).unwrap_or_else(
        |_| {
            warn!(exercise = exercise.name(), "validator panicked");
            ValidationResult::incorrect("This answer could not be checked.")
        },
    )
}

impl SessionEngine for CodeTrainerSession {
    type Unit = CodeExercise;
    /// Raw submitted text, as typed.
    type Answer = String;
    type Outcome = ExerciseOutcome;
    type Summary = CodeTrainerSummary;

    fn current(&self) -> Option<&CodeExercise> {
        if self.end.is_some() {
            return None;
        }
        self.exercises.get(self.current)
    }

    fn answer(
        &mut self,
        code: String,
        scores: &mut ScoreService,
    ) -> Result<ExerciseOutcome, SessionError> {
        let exercise = self.current().ok_or(SessionError::Completed)?;
        let verdict = run_validator(exercise, &code);

        let mut outcome = ExerciseOutcome {
            exercise: exercise.name().to_owned(),
            is_correct: verdict.is_correct,
            feedback: verdict.feedback.filter(|f| !f.trim().is_empty()),
            submitted: code,
            correct_example: exercise.correct_example().to_owned(),
            points: 0,
            ended_session: false,
        };
        self.current += 1;

        if outcome.is_correct {
            self.correct += 1;
            self.score = self.score.saturating_add(CODE_POINTS_PER_CORRECT);
            outcome.points = CODE_POINTS_PER_CORRECT;
            scores.add_score(CODE_TRAINING_FEATURE, CODE_POINTS_PER_CORRECT);
        } else if self.hardmode {
            debug!(exercise = %outcome.exercise, "hardmode failure ends session");
            self.end = Some(SessionEnd::HardmodeFailure);
            outcome.ended_session = true;
        }

        if self.end.is_none() && self.current >= self.exercises.len() {
            self.end = Some(SessionEnd::Completed);
        }
        Ok(outcome)
    }

    fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.exercises.len(),
            answered: self.current,
            is_complete: self.is_complete(),
        }
    }

    fn summary(&self) -> CodeTrainerSummary {
        let end = self.end.unwrap_or(SessionEnd::Completed);
        let grade = match end {
            SessionEnd::HardmodeFailure => CodeTrainerGrade::HardmodeFailed,
            SessionEnd::Completed if self.score > 300 => CodeTrainerGrade::Impressive,
            SessionEnd::Completed if self.score > 100 => CodeTrainerGrade::Acceptable,
            SessionEnd::Completed => CodeTrainerGrade::Weak,
        };
        CodeTrainerSummary {
            language: self.language.clone(),
            hardmode: self.hardmode,
            score: self.score,
            attempted: self.current,
            correct: self.correct,
            total: self.exercises.len(),
            end,
            grade,
        }
    }
}
