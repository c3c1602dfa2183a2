use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizQuestionError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("a question needs at least one option")]
    NoOptions,

    #[error("correct option {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

/// A multiple-choice question in its authored (unshuffled) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    title: String,
    question: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
}

impl QuizQuestion {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizQuestionError` if the question is blank, has no options, or
    /// `correct_index` does not point at one of the options.
    pub fn new(
        title: impl Into<String>,
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizQuestionError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuizQuestionError::EmptyQuestion);
        }
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(QuizQuestionError::NoOptions);
        }
        if correct_index >= options.len() {
            return Err(QuizQuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            title: title.into(),
            question,
            options,
            correct_index,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}
