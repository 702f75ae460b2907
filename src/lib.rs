//! Wordle Advisor
//!
//! Narrows the dictionary to the words consistent with every piece of feedback
//! received so far, and recommends the guess that eliminates the most
//! remaining words on average.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::Word;
//! use wordle_advisor::session::{Advisor, AdvisorConfig};
//!
//! let words = ["raise", "arise", "tepid", "crown"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut advisor = Advisor::new(words, AdvisorConfig::default());
//!
//! advisor.add_guess("tepid", "bbbbb").unwrap();
//! assert_eq!(advisor.candidates().len(), 1);
//! assert_eq!(advisor.next_guess().unwrap().unwrap().text(), "crown");
//! ```

// Core domain types
pub mod core;

// Constraint propagation
pub mod constraints;

// Guess scoring and work distribution
pub mod solver;

// Game session
pub mod session;

pub mod error;

// Playing a board end to end
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::AdvisorError;
