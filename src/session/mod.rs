//! Advisor session
//!
//! Owns the guess record, the accumulated color map and the candidate set,
//! and exposes the recommendation surface.

mod advisor;
mod config;
mod state;

pub use advisor::{Advisor, GuessRecord};
pub use config::{AdvisorConfig, DEFAULT_OPENING};
pub use state::{MAX_GUESSES, SessionState, Status};
