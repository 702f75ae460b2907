//! Command implementations
//!
//! Each command returns a result struct; printing lives in [`crate::output`].

pub mod benchmark;
pub mod recommend;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_words};
pub use recommend::{Recommendation, parse_observation, recommend};
pub use solve::{SolveResult, solve_word};
