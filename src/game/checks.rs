//! Ordered validation checks
//!
//! Each check looks at one property of a normalized candidate word. They run in
//! [`PIPELINE`] order and the first failure wins; later checks are not evaluated.
//! The order is observable: an unreal two-letter word is `NotReal`, not `TooShort`.

use super::RejectionKind;
use crate::core::LetterPool;
use crate::wordlists::DictionaryOracle;

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// Everything a check may look at
pub struct Candidate<'a> {
    /// Normalized submission
    pub word: &'a str,
    pub root: &'a str,
    pub letters: &'a LetterPool,
    /// Accepted words, most recent first
    pub used: &'a [String],
    pub dictionary: &'a dyn DictionaryOracle,
    pub language: &'a str,
}

/// A named validation step
pub struct Check {
    pub name: &'static str,
    pub run: fn(&Candidate<'_>) -> Result<(), RejectionKind>,
}

/// The checks, in the order they run
pub const PIPELINE: &[Check] = &[
    Check {
        name: "originality",
        run: is_original,
    },
    Check {
        name: "feasibility",
        run: is_possible,
    },
    Check {
        name: "realness",
        run: is_real,
    },
    Check {
        name: "length",
        run: is_long_enough,
    },
    Check {
        name: "root word",
        run: is_not_root_word,
    },
];

/// Run every check in order, stopping at the first failure
///
/// # Errors
///
/// Returns the [`RejectionKind`] of the first failing check.
pub fn run_pipeline(candidate: &Candidate<'_>) -> Result<(), RejectionKind> {
    for check in PIPELINE {
        if let Err(kind) = (check.run)(candidate) {
            tracing::trace!(word = candidate.word, check = check.name, "check failed");
            return Err(kind);
        }
    }
    Ok(())
}

fn is_original(candidate: &Candidate<'_>) -> Result<(), RejectionKind> {
    if candidate.used.iter().any(|used| used == candidate.word) {
        return Err(RejectionKind::AlreadyUsed);
    }
    Ok(())
}

fn is_possible(candidate: &Candidate<'_>) -> Result<(), RejectionKind> {
    if candidate.letters.can_spell(candidate.word) {
        Ok(())
    } else {
        Err(RejectionKind::NotPossible)
    }
}

fn is_real(candidate: &Candidate<'_>) -> Result<(), RejectionKind> {
    if candidate
        .dictionary
        .is_recognized(candidate.word, candidate.language)
    {
        Ok(())
    } else {
        Err(RejectionKind::NotReal)
    }
}

fn is_long_enough(candidate: &Candidate<'_>) -> Result<(), RejectionKind> {
    if candidate.word.chars().count() < MIN_WORD_LENGTH {
        return Err(RejectionKind::TooShort);
    }
    Ok(())
}

fn is_not_root_word(candidate: &Candidate<'_>) -> Result<(), RejectionKind> {
    if candidate.word == candidate.root {
        return Err(RejectionKind::IsRootWord);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordListDictionary;

    struct Fixture {
        root: &'static str,
        letters: LetterPool,
        used: Vec<String>,
        dictionary: WordListDictionary,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                root: "silkworm",
                letters: LetterPool::new("silkworm"),
                used: vec!["worm".to_string()],
                dictionary: WordListDictionary::new(
                    "en",
                    ["silkworm", "silk", "worm", "milk", "or", "is", "wormy", "mill"],
                ),
            }
        }

        fn check(&self, word: &str) -> Result<(), RejectionKind> {
            run_pipeline(&self.candidate(word))
        }

        fn candidate<'a>(&'a self, word: &'a str) -> Candidate<'a> {
            Candidate {
                word,
                root: self.root,
                letters: &self.letters,
                used: &self.used,
                dictionary: &self.dictionary,
                language: "en",
            }
        }
    }

    #[test]
    fn pipeline_order() {
        let names: Vec<&str> = PIPELINE.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["originality", "feasibility", "realness", "length", "root word"]
        );
    }

    #[test]
    fn valid_word_passes() {
        assert_eq!(Fixture::new().check("milk"), Ok(()));
    }

    #[test]
    fn used_word_fails_originality_first() {
        assert_eq!(Fixture::new().check("worm"), Err(RejectionKind::AlreadyUsed));
    }

    #[test]
    fn foreign_letters_fail_feasibility() {
        let fixture = Fixture::new();
        assert_eq!(fixture.check("wormy"), Err(RejectionKind::NotPossible));
        assert_eq!(fixture.check("mill"), Err(RejectionKind::NotPossible));
    }

    #[test]
    fn unknown_word_fails_realness() {
        assert_eq!(Fixture::new().check("mirk"), Err(RejectionKind::NotReal));
    }

    #[test]
    fn realness_runs_before_length() {
        let fixture = Fixture::new();
        // "ow" is spellable but not in the dictionary
        assert_eq!(fixture.check("ow"), Err(RejectionKind::NotReal));
        // "or" is spellable and real, so the length check decides
        assert_eq!(fixture.check("or"), Err(RejectionKind::TooShort));
    }

    #[test]
    fn root_word_is_rejected_last() {
        assert_eq!(
            Fixture::new().check("silkworm"),
            Err(RejectionKind::IsRootWord)
        );
    }

    #[test]
    fn individual_checks() {
        let fixture = Fixture::new();
        assert!(is_original(&fixture.candidate("silk")).is_ok());
        assert!(is_possible(&fixture.candidate("silk")).is_ok());
        assert!(is_real(&fixture.candidate("silk")).is_ok());
        assert!(is_long_enough(&fixture.candidate("silk")).is_ok());
        assert!(is_not_root_word(&fixture.candidate("silk")).is_ok());
        assert!(is_long_enough(&fixture.candidate("is")).is_err());
    }
}
