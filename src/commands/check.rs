//! Batch check command
//!
//! Plays a list of words against a fixed root word without any interaction.

use crate::game::{Outcome, Session, SessionConfig};
use crate::wordlists::DictionaryOracle;

/// Result of checking a batch of words
pub struct CheckReport {
    pub root: String,
    /// Each raw input alongside what the session made of it
    pub entries: Vec<(String, Outcome)>,
    pub score: u32,
}

impl CheckReport {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.is_accepted())
            .count()
    }
}

/// Submit `words` in order to a session dealt `root`
///
/// Under the restart policy a rejection re-deals the same root word, so the batch
/// keeps going with a cleared score.
#[must_use]
pub fn check_words<D, S>(
    root: &str,
    words: &[S],
    dictionary: D,
    config: SessionConfig,
) -> CheckReport
where
    D: DictionaryOracle,
    S: AsRef<str>,
{
    let fixed = root.to_string();
    let mut session = Session::new(move || Some(fixed.clone()), dictionary, config);

    let entries = words
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            (raw.to_string(), session.attempt_word(raw))
        })
        .collect();

    CheckReport {
        root: session.root_word().to_string(),
        entries,
        score: session.score(),
    }
}
