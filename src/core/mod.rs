//! Core domain types for Word Scramble
//!
//! Pure functions and types with no I/O: input normalization, the letter pool a
//! root word provides, and the scoring rule.

mod letters;
mod scoring;

pub use letters::{LetterPool, normalize};
pub use scoring::{POINTS_PER_LETTER, points, total_points};
