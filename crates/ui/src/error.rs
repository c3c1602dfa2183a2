use std::io;

use services::{NavigationError, ScoreError, SessionError};
use thiserror::Error;

/// Errors surfaced by the terminal front-end.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UiError {
    /// The input stream reached end-of-file.
    #[error("input closed")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl UiError {
    /// True when the run should wind down normally rather than fail.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}
