//! Letter pools and input normalization
//!
//! A [`LetterPool`] is the multiset of letters in a root word. A candidate is
//! spellable when each of its letters can consume one matching letter from the pool.

use rustc_hash::FxHashMap;
use std::fmt;

/// Normalize raw player input: trim surrounding whitespace and lower-case
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Apple\n"), "apple");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Multiset of the letters in a root word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    size: usize,
}

impl LetterPool {
    /// Build the pool for a word
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut size = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            size += 1;
        }
        Self { counts, size }
    }

    /// Whether `word` can be spelled using each pool letter at most once
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("milk"));
    /// assert!(!pool.can_spell("mill")); // only one 'l'
    /// assert!(!pool.can_spell("milky")); // no 'y'
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    /// Number of times `letter` appears in the pool
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, usize)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        letters.sort_unstable();
        for (ch, count) in letters {
            for _ in 0..count {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
