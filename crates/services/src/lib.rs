#![forbid(unsafe_code)]

pub mod error;
pub mod navigation;
pub mod score_service;
pub mod sessions;

pub use learn_core::Clock;

pub use error::{NavigationError, ScoreError, SessionError};
pub use navigation::{MenuView, NavState, NavigationController, Transition};
pub use score_service::ScoreService;
pub use sessions::{
    CODE_POINTS_PER_CORRECT, CodeTrainerGrade, CodeTrainerSession, CodeTrainerSummary,
    ExerciseOutcome, QUIZ_POINTS_PER_CORRECT, QuizAnswer, QuizEngine, QuizGrade, QuizSession,
    QuizSummary, SessionEnd, SessionEngine, SessionProgress, ShuffledQuestion,
};
