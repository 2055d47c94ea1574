//! Dictionary lookups
//!
//! The session only asks one question of a dictionary: is this a real word in the
//! configured language? [`DictionaryOracle`] is that question; [`WordListDictionary`]
//! answers it from a static word list.

use super::loader::{load_from_file, words_from_slice};
use super::{DICTIONARY, WordListError};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Language tag of the embedded dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a word is recognized in a language
pub trait DictionaryOracle {
    /// `word` is already normalized (trimmed, lower-cased)
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Box<T> {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

/// A fixed set of words in a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    #[must_use]
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language: language.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The English list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, words_from_slice(DICTIONARY))
    }

    /// The embedded list, checked against the language games will query it with
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::UnsupportedLanguage`] unless `language` is
    /// [`DEFAULT_LANGUAGE`]; any other tag would leave every word unrecognized.
    pub fn embedded_in(language: &str) -> Result<Self, WordListError> {
        if !language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) {
            return Err(WordListError::UnsupportedLanguage {
                requested: language.to_string(),
                embedded: DEFAULT_LANGUAGE.to_string(),
            });
        }
        Ok(Self::embedded())
    }

    /// Load a newline-delimited list from disk
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Read`] if the file cannot be read, or
    /// [`WordListError::Empty`] if it holds no words, since a dictionary that
    /// recognizes nothing makes every attempt fail.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, WordListError> {
        let words = load_from_file(&path)?;
        if words.is_empty() {
            return Err(WordListError::Empty(path.as_ref().to_path_buf()));
        }
        Ok(Self::new(language, words))
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
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

impl DictionaryOracle for WordListDictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_listed_words() {
        let dictionary = WordListDictionary::new("en", ["silk", "worm"]);
        assert!(dictionary.is_recognized("silk", "en"));
        assert!(dictionary.is_recognized("worm", "en"));
        assert!(!dictionary.is_recognized("mrow", "en"));
    }

    #[test]
    fn other_languages_are_unrecognized() {
        let dictionary = WordListDictionary::new("en", ["silk"]);
        assert!(!dictionary.is_recognized("silk", "fr"));
        assert!(dictionary.is_recognized("silk", "EN"));
    }

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let dictionary = WordListDictionary::embedded();
        assert_eq!(dictionary.language(), DEFAULT_LANGUAGE);
        for word in ["apple", "worm", "silk", "triangle", "milk"] {
            assert!(dictionary.is_recognized(word, "en"), "{word} should be known");
        }
        assert!(!dictionary.is_recognized("xqzv", "en"));
    }

    #[test]
    fn embedded_in_accepts_only_its_own_language() {
        let dictionary = WordListDictionary::embedded_in("EN").unwrap();
        assert!(dictionary.is_recognized("silk", "EN"));

        let err = WordListDictionary::embedded_in("en-GB").unwrap_err();
        assert!(matches!(
            &err,
            WordListError::UnsupportedLanguage { requested, .. } if requested == "en-GB"
        ));
        assert!(err.to_string().contains("--dictionary"));
    }

    #[test]
    fn references_and_boxes_are_oracles() {
        let dictionary = WordListDictionary::new("en", ["silk"]);
        let by_ref: &dyn DictionaryOracle = &dictionary;
        assert!(by_ref.is_recognized("silk", "en"));

        let boxed: Box<dyn DictionaryOracle> = Box::new(dictionary);
        assert!(boxed.is_recognized("silk", "en"));
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = WordListDictionary::from_file("no/such/dictionary.txt", "en");
        assert!(matches!(result, Err(WordListError::Read { .. })));
    }
}
