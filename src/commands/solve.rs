//! Word solving command
//!
//! Plays a simulated game against a known solution.

use crate::core::Word;
use crate::game::{PlayReport, SimulatedBoard, play};
use crate::session::{Advisor, AdvisorConfig};
use anyhow::{Context, Result, bail};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub report: PlayReport,
}

/// Let the advisor play against `target`
///
/// # Errors
/// Returns an error if `target` is not a valid word, is not in the
/// dictionary, or if the game fails.
pub fn solve_word(target: &str, dictionary: Vec<Word>, config: AdvisorConfig) -> Result<SolveResult> {
    let target = Word::new(target).with_context(|| format!("Invalid target word '{target}'"))?;
    if !dictionary.contains(&target) {
        bail!("'{target}' is not in the dictionary");
    }

    let mut advisor = Advisor::new(dictionary, config);
    let mut board = SimulatedBoard::new(target);
    let report = play(&mut advisor, &mut board)?;

    Ok(SolveResult { target, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use crate::session::MAX_GUESSES;
    use crate::wordlists::{ANSWERS, loader::words_from_slice};

    fn config() -> AdvisorConfig {
        AdvisorConfig::default().with_workers(1)
    }

    #[test]
    fn solve_word_succeeds() {
        let words = words_from_slice(&ANSWERS[..150]);
        let target = words[42].text();

        let result = solve_word(&target, words, config()).unwrap();

        assert_eq!(result.report.outcome, Outcome::Won);
        assert!(result.report.guesses() <= MAX_GUESSES);
        assert_eq!(result.report.steps.last().unwrap().word, result.target);
    }

    #[test]
    fn solve_records_history() {
        let words = words_from_slice(&ANSWERS[..150]);
        let target = words[7].text();

        let result = solve_word(&target, words, config()).unwrap();

        for step in &result.report.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let words = words_from_slice(&ANSWERS[..50]);
        assert!(solve_word("abc", words.clone(), config()).is_err());
        assert!(solve_word("zzzzz", words, config()).is_err());
    }

    #[test]
    fn solve_opening_word_in_one() {
        let words = words_from_slice(&["raise", "arise", "tepid"]);
        let result = solve_word("RAISE", words, config()).unwrap();

        assert_eq!(result.report.guesses(), 1);
        assert!(result.report.steps[0].feedback.is_solved());
    }
}
