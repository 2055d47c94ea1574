//! Rejected submissions
//!
//! A rejection is an ordinary outcome, not an error. Each kind carries the short
//! title and message a front end shows the player.

use std::fmt;

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Already accepted earlier in this session
    AlreadyUsed,
    /// Cannot be spelled from the root word's letters
    NotPossible,
    /// Not recognized by the dictionary
    NotReal,
    /// Shorter than [`MIN_WORD_LENGTH`](super::MIN_WORD_LENGTH)
    TooShort,
    /// The root word itself
    IsRootWord,
}

impl RejectionKind {
    /// Short category label
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
            Self::TooShort | Self::IsRootWord => "Word is not allowed",
        }
    }

    /// Explanation for the player, ending with their current score
    #[must_use]
    pub fn message(self, root: &str, score: u32) -> String {
        let reason = match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotReal => "You can't just make them up!".to_string(),
            Self::TooShort => "Word is too short".to_string(),
            Self::IsRootWord => "You can't use the root word".to_string(),
        };
        format!("{reason}\nYour score: {score}")
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AlreadyUsed => "already used",
            Self::NotPossible => "not possible",
            Self::NotReal => "not real",
            Self::TooShort => "too short",
            Self::IsRootWord => "is root word",
        };
        f.write_str(name)
    }
}

/// A rejected word with the alert a front end should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub word: String,
    pub title: &'static str,
    pub message: String,
}

impl Rejection {
    #[must_use]
    pub fn new(kind: RejectionKind, word: impl Into<String>, root: &str, score: u32) -> Self {
        Self {
            kind,
            word: word.into(),
            title: kind.title(),
            message: kind.message(root, score),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(RejectionKind::AlreadyUsed.title(), "Word used already");
        assert_eq!(RejectionKind::NotPossible.title(), "Word not possible");
        assert_eq!(RejectionKind::NotReal.title(), "Word not recognized");
        assert_eq!(RejectionKind::TooShort.title(), "Word is not allowed");
        assert_eq!(RejectionKind::IsRootWord.title(), "Word is not allowed");
    }

    #[test]
    fn messages_end_with_score() {
        let kinds = [
            RejectionKind::AlreadyUsed,
            RejectionKind::NotPossible,
            RejectionKind::NotReal,
            RejectionKind::TooShort,
            RejectionKind::IsRootWord,
        ];
        for kind in kinds {
            let message = kind.message("silkworm", 35);
            assert!(
                message.ends_with("\nYour score: 35"),
                "{kind}: unexpected message {message:?}"
            );
        }
    }

    #[test]
    fn not_possible_names_the_root() {
        let message = RejectionKind::NotPossible.message("silkworm", 0);
        assert_eq!(
            message,
            "You can't spell that word from 'silkworm'!\nYour score: 0"
        );
    }

    #[test]
    fn rejection_carries_title_and_message() {
        let rejection = Rejection::new(RejectionKind::TooShort, "ok", "silkworm", 10);
        assert_eq!(rejection.word, "ok");
        assert_eq!(rejection.title, "Word is not allowed");
        assert_eq!(rejection.message, "Word is too short\nYour score: 10");
        assert_eq!(
            rejection.to_string(),
            "Word is not allowed: Word is too short\nYour score: 10"
        );
    }
}
