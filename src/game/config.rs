//! Session configuration

use crate::wordlists::DEFAULT_LANGUAGE;
use std::fmt;

/// What happens to the session after a rejected word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RejectionPolicy {
    /// Report the rejection and keep playing the same root word
    #[default]
    Continue,
    /// Report the rejection, then deal a new root word and reset the score
    Restart,
}

impl fmt::Display for RejectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Restart => write!(f, "restart"),
        }
    }
}

/// Tunables for a [`Session`](super::Session)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Language tag passed to the dictionary
    pub language: String,
    pub policy: RejectionPolicy,
}

impl SessionConfig {
    #[must_use]
    pub fn with_policy(mut self, policy: RejectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            policy: RejectionPolicy::default(),
        }
    }
}
