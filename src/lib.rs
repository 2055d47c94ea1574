//! Word Scramble
//!
//! Make as many words as you can from the letters of a random root word. Each letter
//! may be used once, words need at least three letters, must be real, must not be the
//! root word itself and must not repeat. Every accepted letter is worth five points.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::game::{Session, SessionConfig};
//! use word_scramble::wordlists::{StartWords, WordListDictionary};
//!
//! let mut session = Session::new(
//!     StartWords::embedded(),
//!     WordListDictionary::embedded(),
//!     SessionConfig::default(),
//! );
//!
//! println!("Root word: {}", session.root_word());
//! let outcome = session.attempt_word("word");
//! println!("{outcome:?}, score {}", session.score());
//! ```

// Core domain types
pub mod core;

// Session state and validation
pub mod game;

// Word lists and dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
