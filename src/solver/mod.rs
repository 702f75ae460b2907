//! Guess search
//!
//! Expected-elimination scoring, fanned out over a worker pool.

pub mod parallel;
pub mod scorer;

pub use parallel::{DistributeError, map_parallel, resolve_workers};
pub use scorer::{GuessScore, ScoreError, ScoreTable, best_next_guess, score_guesses};
