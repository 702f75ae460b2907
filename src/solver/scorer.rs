//! Expected-elimination scoring of candidate guesses
//!
//! Every guess is played against every remaining solution; each simulated
//! feedback is pushed through the candidate filter on a copy of the color map
//! to count how many solutions it would eliminate. A guess scores the mean of
//! those counts.

use super::parallel::{DistributeError, map_parallel};
use crate::constraints::{ColorMap, Narrowing};
use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// Score of a single guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    pub word: Word,
    /// Mean number of solutions eliminated
    pub score: f64,
}

/// Scores for every guess in a pool, in pool order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<GuessScore>,
}

impl ScoreTable {
    #[must_use]
    pub const fn new(entries: Vec<GuessScore>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in pool order
    pub fn iter(&self) -> impl Iterator<Item = &GuessScore> {
        self.entries.iter()
    }

    /// The first entry with the strictly highest score
    #[must_use]
    pub fn best(&self) -> Option<&GuessScore> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(b) if entry.score.total_cmp(&b.score) != Ordering::Greater => Some(b),
            _ => Some(entry),
        })
    }

    /// Entries sorted by descending score; ties keep pool order
    #[must_use]
    pub fn ranked(&self) -> Vec<GuessScore> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// The `n` highest-scoring entries
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<GuessScore> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Score of `word`, if it was scored
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.word == *word)
            .map(|entry| entry.score)
    }
}

/// Error from a scoring run
#[derive(Debug)]
pub enum ScoreError {
    /// Scoring `candidate` failed
    Unit { candidate: Word, reason: String },
    /// The work could not be distributed
    Distribution(DistributeError),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit { candidate, reason } => {
                write!(f, "Scoring '{candidate}' failed: {reason}")
            }
            Self::Distribution(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unit { .. } => None,
            Self::Distribution(e) => Some(e),
        }
    }
}

/// Mean number of `solutions` eliminated when `guess` is played
///
/// Each solution's feedback is applied hypothetically: `colors` is copied,
/// the observation recorded on the copy, and the filter's survivors counted.
/// Solutions that produce the same feedback share one filter evaluation.
#[must_use]
pub fn expected_eliminations(guess: &Word, solutions: &[Word], colors: &ColorMap) -> f64 {
    if solutions.is_empty() {
        return 0.0;
    }

    let total = solutions.len();
    let mut survivors_by_feedback: FxHashMap<Feedback, usize> = FxHashMap::default();

    let eliminated: usize = solutions
        .iter()
        .map(|solution| {
            let feedback = Feedback::compute(guess, solution);
            let survivors = *survivors_by_feedback.entry(feedback).or_insert_with(|| {
                let mut what_if = *colors;
                what_if.record(guess, &feedback);
                Narrowing::prepare(&what_if, guess, &feedback).survivors(solutions)
            });
            total - survivors
        })
        .sum();

    eliminated as f64 / total as f64
}

/// Score every word of `pool` against `solutions`
///
/// # Errors
/// Returns `ScoreError::Unit` naming the candidate whose scoring failed, or
/// `ScoreError::Distribution` if the worker pool could not be started.
pub fn score_guesses(
    pool: &[Word],
    solutions: &[Word],
    colors: &ColorMap,
    workers: isize,
) -> Result<ScoreTable, ScoreError> {
    if pool.is_empty() || solutions.is_empty() {
        return Ok(ScoreTable::default());
    }

    score_each(
        pool,
        |guess: &Word| expected_eliminations(guess, solutions, colors),
        workers,
    )
}

/// Run `unit` over `pool` and pair each word with its score
fn score_each<F>(pool: &[Word], unit: F, workers: isize) -> Result<ScoreTable, ScoreError>
where
    F: Fn(&Word) -> f64 + Sync,
{
    let scores = map_parallel(unit, pool, workers).map_err(|e| unit_failure(pool, e))?;

    Ok(ScoreTable::new(
        pool.iter()
            .zip(scores)
            .map(|(&word, score)| GuessScore { word, score })
            .collect(),
    ))
}

/// Name the pool word behind a failed unit
fn unit_failure(pool: &[Word], error: DistributeError) -> ScoreError {
    match error {
        DistributeError::WorkerPanicked { index, message } => match pool.get(index) {
            Some(&candidate) => ScoreError::Unit {
                candidate,
                reason: message,
            },
            None => ScoreError::Distribution(DistributeError::WorkerPanicked { index, message }),
        },
        other @ DistributeError::Pool(_) => ScoreError::Distribution(other),
    }
}

/// Find the guess that eliminates the most solutions on average
///
/// Returns the best word (first of any tie) together with the full table.
/// An empty pool or solution set gives `None` and an empty table.
///
/// # Errors
/// Propagates [`score_guesses`] failures; no partial ranking is returned.
///
/// # Examples
/// ```
/// use wordle_advisor::constraints::ColorMap;
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::best_next_guess;
///
/// let words: Vec<Word> = ["crane", "crate", "grate", "irate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let (best, table) = best_next_guess(&words, &words, &ColorMap::new(), 1).unwrap();
/// assert_eq!(table.len(), 4);
/// assert!(best.is_some());
/// ```
pub fn best_next_guess(
    pool: &[Word],
    solutions: &[Word],
    colors: &ColorMap,
    workers: isize,
) -> Result<(Option<Word>, ScoreTable), ScoreError> {
    let table = score_guesses(pool, solutions, colors, workers)?;
    let best = table.best().map(|entry| entry.word);
    Ok((best, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::apply;
    use crate::error::AdvisorError;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    /// Straight transcription of the definition: one filter run per solution
    fn naive_score(guess: &Word, solutions: &[Word], colors: &ColorMap) -> f64 {
        let eliminated: usize = solutions
            .iter()
            .map(|solution| {
                let feedback = Feedback::compute(guess, solution);
                let mut what_if = *colors;
                what_if.record(guess, &feedback);
                solutions.len() - apply(solutions, &what_if, guess, &feedback).len()
            })
            .sum();
        eliminated as f64 / solutions.len() as f64
    }

    #[test]
    fn memoized_score_matches_naive() {
        let solutions = words(&[
            "crane", "crate", "grate", "irate", "slate", "trace", "react", "cater", "geese",
            "creep", "sassy", "silly",
        ]);
        let colors = ColorMap::new();
        for guess in &solutions {
            let fast = expected_eliminations(guess, &solutions, &colors);
            let slow = naive_score(guess, &solutions, &colors);
            assert!((fast - slow).abs() < 1e-12, "{guess}: {fast} vs {slow}");
        }
    }

    #[test]
    fn score_equals_partition_formula() {
        // With an exact filter, survivors are the solution's feedback class:
        // score = n - sum(class^2) / n
        let solutions = words(&["crate", "grate", "irate", "frame"]);
        let guess = Word::new("crate").unwrap();

        // crate -> ggggg (1), grate/irate -> bgggg (2), frame -> bggbg (1)
        let expected = 4.0 - (1.0 + 4.0 + 1.0) / 4.0;
        let score = expected_eliminations(&guess, &solutions, &ColorMap::new());
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn single_solution_scores_zero() {
        let solutions = words(&["raise"]);
        let (best, table) = best_next_guess(&solutions, &solutions, &ColorMap::new(), 0).unwrap();
        assert_eq!(best, Some(solutions[0]));
        assert!(table.score_of(&solutions[0]).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn empty_inputs_give_empty_table() {
        let some = words(&["raise", "arise"]);
        let none: Vec<Word> = Vec::new();

        let (best, table) = best_next_guess(&none, &some, &ColorMap::new(), 0).unwrap();
        assert!(best.is_none());
        assert!(table.is_empty());

        let (best, table) = best_next_guess(&some, &none, &ColorMap::new(), 0).unwrap();
        assert!(best.is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn best_has_maximum_score() {
        let solutions = words(&[
            "crane", "crate", "grate", "irate", "slate", "trace", "react", "cater", "sassy",
        ]);
        let (best, table) = best_next_guess(&solutions, &solutions, &ColorMap::new(), 0).unwrap();
        let best = best.unwrap();
        let best_score = table.score_of(&best).unwrap();

        assert_eq!(table.len(), solutions.len());
        assert!(table.iter().all(|entry| entry.score <= best_score));
    }

    #[test]
    fn worker_count_does_not_change_scores() {
        let solutions = words(&[
            "crane", "crate", "grate", "irate", "slate", "trace", "react", "cater", "geese",
            "creep", "eerie", "speed",
        ]);
        let colors = ColorMap::new();

        let serial = score_guesses(&solutions, &solutions, &colors, 1).unwrap();
        let parallel = score_guesses(&solutions, &solutions, &colors, 0).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn scores_respect_accumulated_colors() {
        // with _RATE known, each guess isolates itself and lumps the other two
        let solutions = words(&["crate", "grate", "irate"]);
        let mut colors = ColorMap::new();
        let guess = Word::new("slate").unwrap();
        let feedback = Feedback::parse("bbggg").unwrap();
        colors.record(&guess, &feedback);

        let table = score_guesses(&solutions, &solutions, &colors, 1).unwrap();
        for entry in table.iter() {
            assert!((entry.score - 4.0 / 3.0).abs() < 1e-12, "{}", entry.word);
        }
    }

    #[test]
    fn ties_pick_first_in_pool_order() {
        let table = ScoreTable::new(vec![
            GuessScore { word: Word::new("aaaaa").unwrap(), score: 1.0 },
            GuessScore { word: Word::new("bbbbb").unwrap(), score: 2.0 },
            GuessScore { word: Word::new("ccccc").unwrap(), score: 2.0 },
            GuessScore { word: Word::new("ddddd").unwrap(), score: 0.5 },
        ]);

        assert_eq!(table.best().unwrap().word.text(), "bbbbb");

        let ranked: Vec<String> = table.ranked().iter().map(|e| e.word.text()).collect();
        assert_eq!(ranked, vec!["bbbbb", "ccccc", "aaaaa", "ddddd"]);
        assert_eq!(table.top(2).len(), 2);
        assert_eq!(table.top(10).len(), 4);
        assert_eq!(table.score_of(&Word::new("zzzzz").unwrap()), None);
    }

    #[test]
    fn failing_unit_names_its_candidate() {
        let pool = words(&["crane", "crate", "grate", "irate", "slate", "trace"]);
        let bad = pool[3];

        for workers in [1, 0] {
            let result = score_each(
                &pool,
                |guess: &Word| {
                    assert!(*guess != bad, "cannot score {guess}");
                    1.0
                },
                workers,
            );

            let err = result.unwrap_err();
            let ScoreError::Unit { candidate, reason } = &err else {
                panic!("expected unit failure, got {err:?}");
            };
            assert_eq!(*candidate, bad);
            assert!(reason.contains("cannot score irate"));

            match AdvisorError::from(err) {
                AdvisorError::WorkerFailure { candidate, .. } => assert_eq!(candidate, bad),
                other => panic!("expected worker failure, got {other:?}"),
            }
        }
    }

    #[test]
    fn unit_failure_outside_pool_is_a_distribution_error() {
        let pool = words(&["crane"]);
        let error = DistributeError::WorkerPanicked {
            index: 5,
            message: "boom".to_string(),
        };
        assert!(matches!(
            unit_failure(&pool, error),
            ScoreError::Distribution(DistributeError::WorkerPanicked { index: 5, .. })
        ));
    }
}
