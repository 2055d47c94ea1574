//! Scoring rule
//!
//! Every letter is worth the same; there are no bonuses or letter weights.

/// Points awarded per character of an accepted word
pub const POINTS_PER_LETTER: u32 = 5;

/// Points for a single accepted word
///
/// # Examples
/// ```
/// use word_scramble::core::points;
///
/// assert_eq!(points("apple"), 25);
/// assert_eq!(points("ant"), 15);
/// ```
#[must_use]
pub fn points(word: &str) -> u32 {
    word.chars().count() as u32 * POINTS_PER_LETTER
}

/// Sum of [`points`] over a list of words
#[must_use]
pub fn total_points<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| points(w.as_ref())).sum()
}
