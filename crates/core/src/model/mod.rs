mod exercise;
mod quiz;
mod score;

pub use exercise::{CodeExercise, ProgrammingLanguage, ValidationResult, Validator, normalize_whitespace};
pub use quiz::{QuizQuestion, QuizQuestionError};
pub use score::{CODE_TRAINING_FEATURE, DEFAULT_PLAYER_NAME, PlayerScore, QUIZLET_FEATURE};
