//! The game session state machine

use super::checks::{Candidate, run_pipeline};
use super::observer::{ObserverId, Observers, SessionEvent, SessionObserver};
use super::{Rejection, RejectionPolicy, SessionConfig};
use crate::core::{LetterPool, normalize, points, total_points};
use crate::wordlists::{DictionaryOracle, FALLBACK_ROOT_WORD, WordSource};

/// Result of submitting a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input was blank; nothing happened
    Ignored,
    /// The word was added to the used words
    Accepted {
        word: String,
        points: u32,
        /// Session score after this word
        score: u32,
    },
    /// The word was turned down
    Rejected {
        rejection: Rejection,
        /// Whether the rejection policy dealt a new root word afterwards
        restarted: bool,
    },
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected { rejection, .. } => Some(rejection),
            _ => None,
        }
    }
}

/// One game of Word Scramble
///
/// Generic over where root words come from and how real words are recognized,
/// so either can be swapped without touching the validation rules.
///
/// # Examples
/// ```
/// use word_scramble::game::{Outcome, Session, SessionConfig};
/// use word_scramble::wordlists::WordListDictionary;
///
/// let dictionary = WordListDictionary::new("en", ["silkworm", "silk", "worm"]);
/// let source = || Some("silkworm".to_string());
/// let mut session = Session::new(source, dictionary, SessionConfig::default());
///
/// assert!(session.attempt_word("  Silk ").is_accepted());
/// assert_eq!(session.score(), 20);
/// assert_eq!(session.used_words(), ["silk"]);
/// assert_eq!(session.attempt_word(""), Outcome::Ignored);
/// ```
pub struct Session<W: WordSource, D: DictionaryOracle> {
    source: W,
    dictionary: D,
    config: SessionConfig,
    root: String,
    letters: LetterPool,
    used: Vec<String>,
    score: u32,
    observers: Observers,
}

impl<W: WordSource, D: DictionaryOracle> Session<W, D> {
    /// Create a session and deal its first root word
    #[must_use]
    pub fn new(source: W, dictionary: D, config: SessionConfig) -> Self {
        let mut session = Self {
            source,
            dictionary,
            config,
            root: String::new(),
            letters: LetterPool::default(),
            used: Vec::new(),
            score: 0,
            observers: Observers::default(),
        };
        session.start_game();
        session
    }

    /// Deal a new root word and reset used words and score
    pub fn start_game(&mut self) -> &str {
        let root = self
            .source
            .draw()
            .map(|word| normalize(&word))
            .filter(|word| !word.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("word source is empty, using '{FALLBACK_ROOT_WORD}'");
                FALLBACK_ROOT_WORD.to_string()
            });

        self.letters = LetterPool::new(&root);
        self.root = root;
        self.used.clear();
        self.score = 0;

        tracing::info!(root = %self.root, "started game");
        self.observers
            .broadcast(&SessionEvent::Started { root: &self.root });
        &self.root
    }

    /// Submit a word
    ///
    /// The input is trimmed and lower-cased first. Blank input is ignored. Otherwise
    /// the word runs through the validation checks; on success it is recorded at the
    /// front of the used words and scored.
    pub fn attempt_word(&mut self, raw: &str) -> Outcome {
        let word = normalize(raw);
        if word.is_empty() {
            return Outcome::Ignored;
        }

        let verdict = run_pipeline(&Candidate {
            word: &word,
            root: &self.root,
            letters: &self.letters,
            used: &self.used,
            dictionary: &self.dictionary,
            language: &self.config.language,
        });

        match verdict {
            Ok(()) => self.accept(word),
            Err(kind) => {
                let rejection = Rejection::new(kind, word, &self.root, self.score);
                tracing::debug!(word = %rejection.word, reason = %kind, "rejected word");
                self.observers.broadcast(&SessionEvent::Rejected {
                    rejection: &rejection,
                });

                let restarted = self.config.policy == RejectionPolicy::Restart;
                if restarted {
                    self.start_game();
                }
                Outcome::Rejected {
                    rejection,
                    restarted,
                }
            }
        }
    }

    fn accept(&mut self, word: String) -> Outcome {
        let points = points(&word);
        self.score += points;
        self.used.insert(0, word.clone());

        tracing::debug!(word = %word, points, score = self.score, "accepted word");
        self.observers.broadcast(&SessionEvent::Accepted {
            word: &word,
            points,
            score: self.score,
        });
        Outcome::Accepted {
            word,
            points,
            score: self.score,
        }
    }

    /// Register an observer for future state changes
    ///
    /// The observer stays registered until the returned id is passed to
    /// [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) -> ObserverId {
        self.observers.add(Box::new(observer))
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Number of registered observers
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterPool {
        &self.letters
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Score rebuilt from the used words; always equal to [`score`](Self::score)
    #[must_use]
    pub fn recomputed_score(&self) -> u32 {
        total_points(&self.used)
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}
