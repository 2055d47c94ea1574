//! Game session
//!
//! A [`Session`] holds the root word, the words accepted so far and the score.
//! Every submission goes through the ordered checks in [`checks`]; the first one
//! that fails decides the [`Rejection`].

pub mod checks;
mod config;
mod observer;
mod rejection;
mod session;

pub use checks::{MIN_WORD_LENGTH, PIPELINE};
pub use config::{RejectionPolicy, SessionConfig};
pub use observer::{ObserverId, SessionEvent, SessionObserver};
pub use rejection::{Rejection, RejectionKind};
pub use session::{Outcome, Session};
