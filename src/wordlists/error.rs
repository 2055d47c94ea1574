//! Word list loading errors

use std::io;
use std::path::PathBuf;

/// A word list could not be turned into something playable
///
/// These are configuration errors: the binary reports them and exits rather than
/// starting a game in a degraded mode.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no words", .0.display())]
    Empty(PathBuf),

    #[error("the embedded dictionary is '{embedded}' only; '{requested}' needs --dictionary <file>")]
    UnsupportedLanguage { requested: String, embedded: String },
}
