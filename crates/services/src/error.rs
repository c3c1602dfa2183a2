//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `ScoreService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("this run's score has already been saved")]
    AlreadySaved,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by session engines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no units available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("answer {index} is out of range for {options} options")]
    InvalidAnswer { index: usize, options: usize },
}

/// Errors emitted by `NavigationController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("invalid choice {choice}: expected a number between 0 and {max}")]
    InvalidChoice { choice: usize, max: usize },
    #[error("navigation has already exited")]
    Exited,
}
