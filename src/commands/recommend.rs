//! Recommend command
//!
//! Replays the guesses made so far and ranks the next guess.

use crate::core::Word;
use crate::session::{Advisor, AdvisorConfig, GuessRecord, Status};
use crate::solver::GuessScore;
use anyhow::{Context, Result, bail};

/// What the advisor makes of a game in progress
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub status: Status,
    pub history: Vec<GuessRecord>,
    /// Top-ranked guesses, empty before the first guess
    pub ranked: Vec<GuessScore>,
    /// Guess to play next; `None` once the game is over or stuck
    pub next: Option<Word>,
    /// Remaining candidates when few enough to list
    pub candidates: Vec<Word>,
}

/// Candidates are listed when at most this many remain
pub const LIST_CANDIDATES_MAX: usize = 20;

/// Split a `guess:feedback` observation
///
/// # Errors
/// Returns an error if the separator is missing.
///
/// # Examples
/// ```
/// use wordle_advisor::commands::parse_observation;
///
/// assert_eq!(parse_observation("raise:bybbg").unwrap(), ("raise", "bybbg"));
/// assert!(parse_observation("raise").is_err());
/// ```
pub fn parse_observation(observation: &str) -> Result<(&str, &str)> {
    let Some((guess, feedback)) = observation.split_once(':') else {
        bail!("expected 'guess:feedback', got '{observation}'");
    };
    Ok((guess.trim(), feedback.trim()))
}

/// Feed `observations` into a fresh session and rank the next guess
///
/// # Errors
/// Returns an error naming the first malformed observation, or if scoring
/// fails.
pub fn recommend(
    dictionary: Vec<Word>,
    config: AdvisorConfig,
    observations: &[String],
) -> Result<Recommendation> {
    let mut advisor = Advisor::new(dictionary, config);

    for (i, observation) in observations.iter().enumerate() {
        let (guess, feedback) = parse_observation(observation)?;
        advisor
            .add_guess(guess, feedback)
            .with_context(|| format!("guess {} '{observation}'", i + 1))?;
    }

    let status = advisor.status();
    let finished = status.state.is_terminal() || status.is_stuck();

    let ranked = if finished || advisor.history().is_empty() {
        Vec::new()
    } else {
        advisor.recommend()?
    };

    let next = if finished {
        None
    } else if let Some(best) = ranked.first()
        && advisor.candidates().len() > 1
    {
        Some(best.word)
    } else {
        advisor.next_guess()?
    };

    let candidates = if advisor.candidates().len() <= LIST_CANDIDATES_MAX {
        advisor.candidates().to_vec()
    } else {
        Vec::new()
    };

    Ok(Recommendation {
        status,
        history: advisor.history().to_vec(),
        ranked,
        next,
        candidates,
    })
}
