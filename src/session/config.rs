//! Advisor configuration

use crate::core::Word;

/// Opening guess suggested before any feedback exists
pub const DEFAULT_OPENING: &str = "raise";

/// Tunables for an [`Advisor`](super::Advisor)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Requested scoring workers; `0` = all cores, negative = all minus n
    pub workers: isize,
    /// Guess to suggest on an empty history, skipping the full search
    pub opening: Option<Word>,
    /// Number of ranked guesses to present
    pub top: usize,
}

impl AdvisorConfig {
    #[must_use]
    pub fn with_workers(mut self, workers: isize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Option<Word>) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            opening: Word::new(DEFAULT_OPENING).ok(),
            top: 5,
        }
    }
}
