//! Drive an advisor through a full game

use super::board::GameBoard;
use crate::core::{Feedback, Word};
use crate::session::{Advisor, SessionState};
use anyhow::{Context, Result};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    /// Guess budget used up
    Exhausted,
    /// No dictionary word matched the feedback
    Stuck,
}

/// One turn of a played game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of [`play`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    pub outcome: Outcome,
    pub steps: Vec<TurnStep>,
}

impl PlayReport {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// Play `board` to the end, taking every guess from `advisor`
///
/// Stops on a win, when the guess budget runs out, or when the advisor has no
/// candidate left to suggest.
///
/// # Errors
/// Returns an error if the board fails or scoring fails.
pub fn play<B: GameBoard>(advisor: &mut Advisor, board: &mut B) -> Result<PlayReport> {
    let mut steps = Vec::new();

    let outcome = loop {
        match advisor.state() {
            SessionState::Won => break Outcome::Won,
            SessionState::Exhausted => break Outcome::Exhausted,
            SessionState::Idle | SessionState::Guessing(_) => {}
        }

        let turn = advisor.history().len() + 1;
        let Some(guess) = advisor
            .next_guess()
            .with_context(|| format!("choosing guess {turn}"))?
        else {
            break Outcome::Stuck;
        };

        board
            .submit_guess(&guess)
            .with_context(|| format!("submitting guess {turn} '{guess}'"))?;
        let feedback = board
            .read_feedback()
            .with_context(|| format!("reading feedback for '{guess}'"))?;

        let candidates_before = advisor.candidates().len();
        advisor.record(guess, feedback)?;

        steps.push(TurnStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: advisor.candidates().len(),
        });
    };

    Ok(PlayReport { outcome, steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SimulatedBoard;
    use crate::session::{AdvisorConfig, MAX_GUESSES};
    use crate::wordlists::{ANSWERS, loader::words_from_slice};
    use anyhow::bail;

    fn advisor(words: Vec<Word>) -> Advisor {
        Advisor::new(words, AdvisorConfig::default().with_workers(1))
    }

    #[test]
    fn solves_from_small_dictionary() {
        let words = words_from_slice(&["raise", "arise", "tepid", "crane", "slate"]);
        let solution = Word::new("slate").unwrap();

        let mut advisor = advisor(words);
        let mut board = SimulatedBoard::new(solution);
        let report = play(&mut advisor, &mut board).unwrap();

        assert!(report.is_won());
        assert_eq!(report.steps[0].word.text(), "raise");
        assert_eq!(report.steps.last().unwrap().word, solution);
        assert!(report.guesses() <= MAX_GUESSES);
        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solves_embedded_words() {
        let words = words_from_slice(&ANSWERS[..200]);
        for &solution in words.iter().step_by(40) {
            let mut advisor = advisor(words.clone());
            let mut board = SimulatedBoard::new(solution);
            let report = play(&mut advisor, &mut board).unwrap();

            assert!(report.is_won(), "failed on {solution}");
            assert_eq!(advisor.state(), SessionState::Won);
        }
    }

    #[test]
    fn unknown_solution_gets_stuck() {
        let words = words_from_slice(&["raise", "arise", "tepid"]);
        let mut advisor = advisor(words);
        let mut board = SimulatedBoard::new(Word::new("crown").unwrap());

        let report = play(&mut advisor, &mut board).unwrap();
        assert_eq!(report.outcome, Outcome::Stuck);
        assert!(advisor.status().is_stuck());
    }

    struct BrokenBoard;

    impl GameBoard for BrokenBoard {
        fn submit_guess(&mut self, _guess: &Word) -> Result<()> {
            Ok(())
        }

        fn read_feedback(&mut self) -> Result<Feedback> {
            bail!("tile state unreadable")
        }
    }

    #[test]
    fn board_errors_propagate() {
        let words = words_from_slice(&["raise", "arise"]);
        let mut advisor = advisor(words);

        let err = play(&mut advisor, &mut BrokenBoard).unwrap_err();
        assert!(format!("{err:#}").contains("tile state unreadable"));
        assert!(advisor.history().is_empty());
    }
}
