//! Root word sources
//!
//! A [`WordSource`] deals the root word for each new session.

use super::loader::{load_from_file, words_from_slice};
use super::{START_WORDS, WordListError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::path::Path;

/// Root word used when a source has nothing to offer
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Something that can deal root words
pub trait WordSource {
    /// Draw the next root word
    ///
    /// Returns `None` if the source has no words; the session then falls back to
    /// [`FALLBACK_ROOT_WORD`].
    fn draw(&mut self) -> Option<String>;
}

/// Closures make convenient fixed or scripted sources
impl<F> WordSource for F
where
    F: FnMut() -> Option<String>,
{
    fn draw(&mut self) -> Option<String> {
        self()
    }
}

/// A list of candidate root words, drawn from uniformly at random
pub struct StartWords {
    words: Vec<String>,
    rng: StdRng,
}

impl StartWords {
    /// Create a source over `words`, seeded from the operating system
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a source with a fixed seed, for reproducible deals
    #[must_use]
    pub fn seeded(words: Vec<String>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(START_WORDS))
    }

    /// Load a newline-delimited list from disk
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Read`] if the file cannot be read. An empty file is
    /// accepted; every deal then falls back to [`FALLBACK_ROOT_WORD`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let words = load_from_file(&path)?;
        if words.is_empty() {
            tracing::warn!(
                path = %path.as_ref().display(),
                "start word list is empty, every game will use '{FALLBACK_ROOT_WORD}'"
            );
        }
        Ok(Self::new(words))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for StartWords {
    fn draw(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}
