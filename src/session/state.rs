//! Session state machine

use std::fmt;

/// Guess budget of a game
pub const MAX_GUESSES: usize = 6;

/// Progress of a game
///
/// `Idle -> Guessing(k) -> {Won, Exhausted}`; the last two are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No guesses yet
    Idle,
    /// `k` guesses made (1..=5), not yet solved
    Guessing(usize),
    /// All-green feedback received
    Won,
    /// Guess budget used up without a win
    Exhausted,
}

impl SessionState {
    /// State after the guess numbered `guesses_used` produced `solved`
    #[must_use]
    pub const fn after_guess(guesses_used: usize, solved: bool) -> Self {
        if solved {
            Self::Won
        } else if guesses_used >= MAX_GUESSES {
            Self::Exhausted
        } else {
            Self::Guessing(guesses_used)
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Guessing(k) => write!(f, "guessing ({k}/{MAX_GUESSES})"),
            Self::Won => write!(f, "won"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Snapshot of a session for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub state: SessionState,
    /// Candidate solutions still consistent with all feedback
    pub remaining: usize,
    pub guesses_used: usize,
}

impl Status {
    /// No dictionary word matches the feedback given
    #[must_use]
    pub const fn is_stuck(&self) -> bool {
        self.remaining == 0
    }

    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses_used)
    }
}
