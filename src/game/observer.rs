//! Session change notifications
//!
//! Front ends register a [`SessionObserver`] to hear about state changes instead of
//! polling the session after every call.

use super::Rejection;

/// A change in session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent<'a> {
    /// A new root word was dealt; used words and score are reset
    Started { root: &'a str },
    /// A word was accepted
    Accepted {
        word: &'a str,
        points: u32,
        score: u32,
    },
    /// A word was rejected. With the restart policy a `Started` event follows.
    Rejected { rejection: &'a Rejection },
}

/// Receives [`SessionEvent`]s
pub trait SessionObserver {
    fn notify(&mut self, event: &SessionEvent<'_>);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent<'_>),
{
    fn notify(&mut self, event: &SessionEvent<'_>) {
        self(event);
    }
}

/// Identifies a registered observer so it can be removed again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub(super) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn SessionObserver>)>,
}

impl Observers {
    pub(super) fn add(&mut self, observer: Box<dyn SessionObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(super) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn broadcast(&mut self, event: &SessionEvent<'_>) {
        for (_, observer) in &mut self.entries {
            observer.notify(event);
        }
    }
}
