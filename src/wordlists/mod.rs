//! Dictionary supply
//!
//! The default solution dictionary is embedded in the binary; a custom list can
//! be loaded from a file instead.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
