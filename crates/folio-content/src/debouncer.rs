//! Event debouncing.
//!
//! Editors typically emit several filesystem events per save (write,
//! truncate, rename). The debouncer coalesces them into one event per
//! path, emitted once the path has been quiet for the debounce window.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::event::{ContentEvent, ContentEventKind};

/// A recorded event waiting out its debounce window.
struct PendingEvent {
    kind: ContentEventKind,
    deadline: Instant,
}

/// Thread-safe per-path event debouncer.
pub(crate) struct EventDebouncer {
    pending: Mutex<HashMap<PathBuf, PendingEvent>>,
    window: Duration,
}

impl EventDebouncer {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            window,
        }
    }

    /// Record a raw event, coalescing with any pending event for the
    /// same path and pushing the deadline out by the debounce window.
    ///
    /// Safe to call from the notify callback thread.
    pub(crate) fn record(&self, path: PathBuf, kind: ContentEventKind) {
        use std::collections::hash_map::Entry;

        let mut pending = self.pending.lock().unwrap();
        let deadline = Instant::now() + self.window;

        match pending.entry(path) {
            Entry::Vacant(slot) => {
                slot.insert(PendingEvent { kind, deadline });
            }
            Entry::Occupied(mut slot) => {
                if let Some(kind) = Self::coalesce(slot.get().kind, kind) {
                    *slot.get_mut() = PendingEvent { kind, deadline };
                } else {
                    // Created then Removed within one window: the file
                    // never existed as far as consumers are concerned
                    slot.remove();
                }
            }
        }
    }

    /// Combine a pending event kind with a newly observed one.
    ///
    /// Returns `None` when the pair cancels out.
    fn coalesce(pending: ContentEventKind, new: ContentEventKind) -> Option<ContentEventKind> {
        use ContentEventKind::{Created, Modified, Removed};

        match (pending, new) {
            (Created, Removed) => None,
            (Created, _) => Some(Created),
            (Modified, Modified) => Some(Modified),
            (Modified, other) => Some(other),
            (Removed, Created) => Some(Modified), // replaced in place
            (Removed, _) => Some(Removed),
        }
    }

    /// Take all events whose debounce window has elapsed.
    pub(crate) fn drain_ready(&self) -> Vec<ContentEvent> {
        let mut pending = self.pending.lock().unwrap();
        let now = Instant::now();

        let ready: Vec<PathBuf> = pending
            .iter()
            .filter(|(_, event)| event.deadline <= now)
            .map(|(path, _)| path.clone())
            .collect();

        ready
            .into_iter()
            .map(|path| {
                let event = pending.remove(&path).expect("path was just found");
                ContentEvent {
                    path,
                    kind: event.kind,
                }
            })
            .collect()
    }
}
