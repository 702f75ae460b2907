//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    benchmark_progress_bar, print_benchmark_result, print_feedback, print_recommendation,
    print_solve_result,
};
