//! Benchmark command
//!
//! Plays simulated games over a sample of dictionary words.

use crate::core::Word;
use crate::game::{Outcome, SimulatedBoard, play};
use crate::session::{Advisor, AdvisorConfig};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Words not solved within the guess budget
    pub failed: Vec<Word>,
    /// Guesses used across solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct words from `dictionary`
///
/// A fixed `seed` gives a reproducible sample.
#[must_use]
pub fn sample_words(dictionary: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    dictionary
        .choose_multiple(&mut rng, count)
        .copied()
        .collect()
}

/// Play one game per target, advancing `progress` after each
///
/// # Errors
/// Returns an error if any game fails to run.
pub fn run_benchmark(
    dictionary: &[Word],
    targets: &[Word],
    config: &AdvisorConfig,
    progress: &ProgressBar,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let mut advisor = Advisor::new(dictionary.to_vec(), config.clone());

    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for &target in targets {
        advisor.reset();
        let mut board = SimulatedBoard::new(target);
        let report = play(&mut advisor, &mut board).with_context(|| format!("playing '{target}'"))?;

        if report.outcome == Outcome::Won {
            let guesses = report.guesses();
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed.push(target);
        }

        progress.set_message(target.text());
        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failed.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
