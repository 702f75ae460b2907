//! The advisor session

use super::config::AdvisorConfig;
use super::state::{SessionState, Status};
use crate::constraints::{ColorMap, apply};
use crate::core::{Feedback, Word};
use crate::error::AdvisorError;
use crate::solver::{GuessScore, ScoreTable, best_next_guess, score_guesses};

/// One submitted guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Tracks one game and recommends guesses
///
/// All mutation goes through [`Advisor::record`]; scoring borrows the session
/// immutably, so the candidate set cannot change under an in-flight search.
#[derive(Debug, Clone)]
pub struct Advisor {
    config: AdvisorConfig,
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    colors: ColorMap,
    history: Vec<GuessRecord>,
    state: SessionState,
}

impl Advisor {
    /// Start a session over `dictionary`, in dictionary order
    #[must_use]
    pub fn new(dictionary: Vec<Word>, config: AdvisorConfig) -> Self {
        Self {
            config,
            candidates: dictionary.clone(),
            dictionary,
            colors: ColorMap::new(),
            history: Vec::new(),
            state: SessionState::Idle,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Words still consistent with all feedback
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// Guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            state: self.state,
            remaining: self.candidates.len(),
            guesses_used: self.history.len(),
        }
    }

    /// Parse and record a guess with its feedback string
    ///
    /// Both inputs are validated before anything changes.
    ///
    /// # Errors
    /// `MalformedGuess` / `MalformedFeedback` for bad input, `SessionFinished`
    /// once the game is won or out of guesses.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::session::{Advisor, AdvisorConfig, SessionState};
    ///
    /// let words = ["raise", "arise", "tepid"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let mut advisor = Advisor::new(words, AdvisorConfig::default());
    ///
    /// advisor.add_guess("arise", "yyggg").unwrap();
    /// assert_eq!(advisor.candidates().len(), 1);
    /// assert_eq!(advisor.state(), SessionState::Guessing(1));
    ///
    /// assert!(advisor.add_guess("rase", "ggggg").is_err());
    /// assert_eq!(advisor.history().len(), 1);
    /// ```
    pub fn add_guess(&mut self, guess: &str, feedback: &str) -> Result<(), AdvisorError> {
        let word = Word::new(guess)?;
        let feedback = Feedback::parse(feedback)?;
        self.record(word, feedback)
    }

    /// Record a validated guess and narrow the candidates
    ///
    /// # Errors
    /// `SessionFinished` once the game is won or out of guesses.
    pub fn record(&mut self, word: Word, feedback: Feedback) -> Result<(), AdvisorError> {
        if self.state.is_terminal() {
            return Err(AdvisorError::SessionFinished(self.state));
        }

        self.colors.record(&word, &feedback);
        self.candidates = apply(&self.candidates, &self.colors, &word, &feedback);
        self.history.push(GuessRecord { word, feedback });
        self.state = SessionState::after_guess(self.history.len(), feedback.is_solved());

        Ok(())
    }

    /// Score every remaining candidate as a guess
    ///
    /// # Errors
    /// `WorkerFailure` if any candidate's scoring fails.
    pub fn score_table(&self) -> Result<ScoreTable, AdvisorError> {
        Ok(score_guesses(
            &self.candidates,
            &self.candidates,
            &self.colors,
            self.config.workers,
        )?)
    }

    /// The candidate that eliminates the most solutions on average
    ///
    /// `None` when no candidates remain.
    ///
    /// # Errors
    /// `WorkerFailure` if any candidate's scoring fails.
    pub fn best_next_guess(&self) -> Result<Option<Word>, AdvisorError> {
        let (best, _) = best_next_guess(
            &self.candidates,
            &self.candidates,
            &self.colors,
            self.config.workers,
        )?;
        Ok(best)
    }

    /// Ranked `(word, score)` pairs, best first, up to the configured count
    ///
    /// # Errors
    /// `WorkerFailure` if any candidate's scoring fails.
    pub fn recommend(&self) -> Result<Vec<GuessScore>, AdvisorError> {
        Ok(self.score_table()?.top(self.config.top))
    }

    /// Guess to play next
    ///
    /// On an empty history this is the configured opening word when the
    /// dictionary contains it; otherwise the best scored candidate. A single
    /// remaining candidate is returned without scoring.
    ///
    /// # Errors
    /// `WorkerFailure` if any candidate's scoring fails.
    pub fn next_guess(&self) -> Result<Option<Word>, AdvisorError> {
        if self.history.is_empty()
            && let Some(opening) = self.config.opening
            && self.candidates.contains(&opening)
        {
            return Ok(Some(opening));
        }

        if let [only] = self.candidates.as_slice() {
            return Ok(Some(*only));
        }

        self.best_next_guess()
    }

    /// One emoji row per guess, e.g. `🟨🟨🟩🟩🟩`
    #[must_use]
    pub fn render_grid(&self) -> String {
        self.history
            .iter()
            .map(|record| format!("{}\n", record.feedback.to_emoji()))
            .collect()
    }

    /// One guessed word per line
    #[must_use]
    pub fn render_guesses(&self) -> String {
        self.history
            .iter()
            .map(|record| format!("{}\n", record.word))
            .collect()
    }

    /// Start over with the full dictionary
    pub fn reset(&mut self) {
        self.candidates.clone_from(&self.dictionary);
        self.colors = ColorMap::new();
        self.history.clear();
        self.state = SessionState::Idle;
    }
}
