//! Property tests for session invariants

use proptest::prelude::*;
use std::collections::HashMap;
use word_scramble::core::{LetterPool, points};
use word_scramble::game::{Outcome, RejectionKind, RejectionPolicy, Session, SessionConfig};
use word_scramble::wordlists::{DictionaryOracle, WordSource};

/// Recognizes every word, so realness never decides an outcome
struct Anything;

impl DictionaryOracle for Anything {
    fn is_recognized(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

/// Recognizes words containing a vowel
struct HasVowel;

impl DictionaryOracle for HasVowel {
    fn is_recognized(&self, word: &str, _language: &str) -> bool {
        word.chars().any(|c| "aeiou".contains(c))
    }
}

fn fixed(root: String) -> impl WordSource {
    move || Some(root.clone())
}

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

fn is_sub_multiset(word: &str, root: &str) -> bool {
    let available = letter_counts(root);
    letter_counts(word)
        .iter()
        .all(|(c, n)| available.get(c).copied().unwrap_or(0) >= *n)
}

fn kind(outcome: &Outcome) -> Option<RejectionKind> {
    outcome.rejection().map(|r| r.kind)
}

proptest! {
    #[test]
    fn feasibility_matches_multiset_subset(root in "[a-h]{3,10}", word in "[a-j]{1,10}") {
        let mut session = Session::new(fixed(root.clone()), Anything, SessionConfig::default());
        let outcome = session.attempt_word(&word);

        if !is_sub_multiset(&word, &root) {
            prop_assert_eq!(kind(&outcome), Some(RejectionKind::NotPossible));
        } else {
            prop_assert_ne!(kind(&outcome), Some(RejectionKind::NotPossible));
        }
        prop_assert_eq!(LetterPool::new(&root).can_spell(&word), is_sub_multiset(&word, &root));
    }

    #[test]
    fn score_never_drifts_from_used_words(
        root in "[a-f]{6,10}",
        attempts in prop::collection::vec("[a-f]{0,6}", 0..30),
    ) {
        let mut session = Session::new(fixed(root.clone()), HasVowel, SessionConfig::default());
        let mut previous = 0;

        for attempt in &attempts {
            session.attempt_word(attempt);
            prop_assert!(session.score() >= previous);
            prop_assert_eq!(session.score(), session.recomputed_score());
            previous = session.score();
        }

        let used = session.used_words();
        for (i, word) in used.iter().enumerate() {
            prop_assert!(word.chars().count() >= 3);
            prop_assert!(word != &root);
            prop_assert!(is_sub_multiset(word, &root));
            prop_assert!(!used[i + 1..].contains(word));
        }
    }

    #[test]
    fn rejections_leave_state_untouched(
        root in "[a-f]{6,10}",
        attempts in prop::collection::vec("[a-z]{0,6}", 1..20),
    ) {
        let mut session = Session::new(fixed(root), HasVowel, SessionConfig::default());

        for attempt in &attempts {
            let before_used = session.used_words().to_vec();
            let before_score = session.score();

            match session.attempt_word(attempt) {
                Outcome::Accepted { word, points: gained, score } => {
                    prop_assert_eq!(gained, points(&word));
                    prop_assert_eq!(score, before_score + gained);
                    prop_assert_eq!(&session.used_words()[0], &word);
                    prop_assert_eq!(&session.used_words()[1..], before_used.as_slice());
                }
                Outcome::Rejected { .. } | Outcome::Ignored => {
                    prop_assert_eq!(session.used_words(), before_used.as_slice());
                    prop_assert_eq!(session.score(), before_score);
                }
            }
        }
    }

    #[test]
    fn short_words_are_too_short_only_when_real(root in "[a-f]{6,10}", word in "[a-f]{1,2}") {
        let mut session = Session::new(fixed(root.clone()), HasVowel, SessionConfig::default());
        let outcome = session.attempt_word(&word);

        let expected = if !is_sub_multiset(&word, &root) {
            RejectionKind::NotPossible
        } else if HasVowel.is_recognized(&word, "en") {
            RejectionKind::TooShort
        } else {
            RejectionKind::NotReal
        };
        prop_assert_eq!(kind(&outcome), Some(expected));
    }

    #[test]
    fn start_game_always_resets(
        root in "[a-f]{6,10}",
        attempts in prop::collection::vec("[a-f]{3,6}", 0..15),
        restart in any::<bool>(),
    ) {
        let policy = if restart { RejectionPolicy::Restart } else { RejectionPolicy::Continue };
        let config = SessionConfig::default().with_policy(policy);
        let mut session = Session::new(fixed(root.clone()), Anything, config);

        for attempt in &attempts {
            session.attempt_word(attempt);
        }

        prop_assert_eq!(session.start_game(), root.as_str());
        prop_assert!(session.used_words().is_empty());
        prop_assert_eq!(session.score(), 0);
    }
}

#[test]
fn root_word_is_rejected_even_when_real() {
    let mut session = Session::new(
        fixed("silkworm".to_string()),
        Anything,
        SessionConfig::default(),
    );
    assert_eq!(
        kind(&session.attempt_word("SILKWORM")),
        Some(RejectionKind::IsRootWord)
    );
}

#[test]
fn apple_scores_twenty_five() {
    let mut session = Session::new(
        fixed("pineapple".to_string()),
        Anything,
        SessionConfig::default(),
    );
    session.attempt_word("pine");
    let before = session.score();

    assert!(session.attempt_word("apple").is_accepted());
    assert_eq!(session.score(), before + 25);
    assert_eq!(session.used_words()[0], "apple");
}

#[test]
fn same_word_twice() {
    let mut session = Session::new(
        fixed("pineapple".to_string()),
        Anything,
        SessionConfig::default(),
    );
    assert!(session.attempt_word("apple").is_accepted());
    assert_eq!(
        kind(&session.attempt_word("apple")),
        Some(RejectionKind::AlreadyUsed)
    );
    assert_eq!(session.score(), 25);
    assert_eq!(session.used_words(), ["apple"]);
}
