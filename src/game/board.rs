//! Game boards

use crate::core::{Feedback, Word};
use anyhow::{Result, bail};

/// A game the advisor can play
///
/// Implementations map their own tile representation into [`Feedback`].
pub trait GameBoard {
    /// Enter `guess` as the next row
    ///
    /// # Errors
    /// Returns an error if the board rejects or cannot take the guess.
    fn submit_guess(&mut self, guess: &Word) -> Result<()>;

    /// Feedback for the most recently submitted row
    ///
    /// # Errors
    /// Returns an error if no row has been submitted or the tiles can't be read.
    fn read_feedback(&mut self) -> Result<Feedback>;
}

/// In-process board that knows the solution
#[derive(Debug, Clone)]
pub struct SimulatedBoard {
    solution: Word,
    rows: Vec<Feedback>,
}

impl SimulatedBoard {
    #[must_use]
    pub const fn new(solution: Word) -> Self {
        Self {
            solution,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> Word {
        self.solution
    }

    /// Rows submitted so far
    #[must_use]
    pub fn rows(&self) -> &[Feedback] {
        &self.rows
    }
}

impl GameBoard for SimulatedBoard {
    fn submit_guess(&mut self, guess: &Word) -> Result<()> {
        if self.rows.last().is_some_and(Feedback::is_solved) {
            bail!("board already solved, refusing '{guess}'");
        }
        self.rows.push(Feedback::compute(guess, &self.solution));
        Ok(())
    }

    fn read_feedback(&mut self) -> Result<Feedback> {
        match self.rows.last() {
            Some(&feedback) => Ok(feedback),
            None => bail!("no guess submitted yet"),
        }
    }
}
