//! Constraint propagation
//!
//! The accumulated color map and the candidate filter built on it.

mod color_map;
mod filter;

pub use color_map::{ColorMap, SlotSet};
pub use filter::{Narrowing, apply};
