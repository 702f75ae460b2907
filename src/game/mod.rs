//! Game automation boundary
//!
//! Whatever actually plays the game (a browser driver, a human relay, a
//! simulation) implements [`GameBoard`]; [`play`] drives an advisor against it.

mod board;
mod play;

pub use board::{GameBoard, SimulatedBoard};
pub use play::{Outcome, PlayReport, TurnStep, play};
