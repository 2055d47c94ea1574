//! Word lists for Word Scramble
//!
//! Embedded lists compiled into the binary, file loading, and the two collaborators
//! a session draws on: a [`WordSource`] for root words and a [`DictionaryOracle`]
//! for real-word checks.

mod dictionary;
mod embedded;
mod error;
pub mod loader;
mod source;

pub use dictionary::{DEFAULT_LANGUAGE, DictionaryOracle, WordListDictionary};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use error::WordListError;
pub use source::{FALLBACK_ROOT_WORD, StartWords, WordSource};
