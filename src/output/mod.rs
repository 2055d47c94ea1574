//! Terminal output formatting
//!
//! Display utilities for the line-mode game and batch checks.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_report, write_accepted, write_rejection, write_root_word, write_used_words,
};
