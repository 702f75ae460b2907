//! Advisor error taxonomy

use crate::core::{FeedbackError, Word, WordError};
use crate::session::SessionState;
use crate::solver::{DistributeError, ScoreError};
use std::fmt;

/// Errors surfaced by an [`Advisor`](crate::session::Advisor)
///
/// Input errors are raised before any session state changes.
#[derive(Debug)]
pub enum AdvisorError {
    MalformedGuess(WordError),
    MalformedFeedback(FeedbackError),
    /// The game already ended in this state
    SessionFinished(SessionState),
    /// Scoring `candidate` failed; no ranking is produced
    WorkerFailure { candidate: Word, reason: String },
    Distribution(DistributeError),
}

impl fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGuess(e) => write!(f, "Malformed guess: {e}"),
            Self::MalformedFeedback(e) => write!(f, "Malformed feedback: {e}"),
            Self::SessionFinished(state) => {
                write!(f, "No more guesses accepted, game is {state}")
            }
            Self::WorkerFailure { candidate, reason } => {
                write!(f, "Scoring failed for candidate '{candidate}': {reason}")
            }
            Self::Distribution(e) => write!(f, "Scoring could not run: {e}"),
        }
    }
}

impl std::error::Error for AdvisorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedGuess(e) => Some(e),
            Self::MalformedFeedback(e) => Some(e),
            Self::Distribution(e) => Some(e),
            Self::SessionFinished(_) | Self::WorkerFailure { .. } => None,
        }
    }
}

impl From<WordError> for AdvisorError {
    fn from(e: WordError) -> Self {
        Self::MalformedGuess(e)
    }
}

impl From<FeedbackError> for AdvisorError {
    fn from(e: FeedbackError) -> Self {
        Self::MalformedFeedback(e)
    }
}

impl From<ScoreError> for AdvisorError {
    fn from(e: ScoreError) -> Self {
        match e {
            ScoreError::Unit { candidate, reason } => Self::WorkerFailure { candidate, reason },
            ScoreError::Distribution(e) => Self::Distribution(e),
        }
    }
}
