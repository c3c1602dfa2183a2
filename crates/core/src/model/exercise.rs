use std::fmt;
use std::sync::Arc;

/// Verdict returned by a [`Validator`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub is_correct: bool,
    pub feedback: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn correct() -> Self {
        Self {
            is_correct: true,
            feedback: None,
        }
    }

    #[must_use]
    pub fn incorrect(feedback: impl Into<String>) -> Self {
        Self {
            is_correct: false,
            feedback: Some(feedback.into()),
        }
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}

/// Checks a free-text answer for one exercise.
///
/// Implementations resolve every input to a verdict; they must not panic.
pub trait Validator: Send + Sync {
    fn validate(&self, code: &str) -> ValidationResult;
}

impl<F> Validator for F
where
    F: Fn(&str) -> ValidationResult + Send + Sync,
{
    fn validate(&self, code: &str) -> ValidationResult {
        self(code)
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
#[must_use]
pub fn normalize_whitespace(code: &str) -> String {
    code.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One free-text syntax exercise.
#[derive(Clone)]
pub struct CodeExercise {
    name: String,
    description: String,
    correct_example: String,
    validator: Arc<dyn Validator>,
}

impl CodeExercise {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        correct_example: impl Into<String>,
        validator: impl Validator + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            correct_example: correct_example.into(),
            validator: Arc::new(validator),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn correct_example(&self) -> &str {
        &self.correct_example
    }

    #[must_use]
    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }
}

impl fmt::Debug for CodeExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeExercise")
            .field("name", &self.name)
            .field("correct_example", &self.correct_example)
            .finish_non_exhaustive()
    }
}

/// A language and its ordered exercise list.
#[derive(Debug, Clone)]
pub struct ProgrammingLanguage {
    name: String,
    exercises: Vec<CodeExercise>,
}

impl ProgrammingLanguage {
    #[must_use]
    pub fn new(name: impl Into<String>, exercises: Vec<CodeExercise>) -> Self {
        Self {
            name: name.into(),
            exercises,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn exercises(&self) -> &[CodeExercise] {
        &self.exercises
    }
}
