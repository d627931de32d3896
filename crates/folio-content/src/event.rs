//! Content change events.
//!
//! Types for subscribing to content directory changes through
//! [`ContentWatcher::watch`](crate::ContentWatcher::watch).

use std::path::PathBuf;
use std::sync::mpsc;

/// Kind of content change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentEventKind {
    /// A content file was created.
    Created,
    /// A content file was modified.
    Modified,
    /// A content file was removed.
    Removed,
}

/// A debounced content change event.
///
/// The path is relative to the watched directory (e.g., `projects.yaml`).
/// The consumer reloads both files regardless of which one changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentEvent {
    /// Relative path of the changed file.
    pub path: PathBuf,
    /// Kind of change.
    pub kind: ContentEventKind,
}

/// Receiver for content events.
///
/// Wraps a [`std::sync::mpsc::Receiver`] for synchronous event delivery.
pub struct ContentEventReceiver {
    rx: mpsc::Receiver<ContentEvent>,
}

impl ContentEventReceiver {
    pub(crate) fn new(rx: mpsc::Receiver<ContentEvent>) -> Self {
        Self { rx }
    }

    /// Wait for the next event (blocking).
    ///
    /// Returns `None` when the sender is dropped.
    #[must_use]
    pub fn recv(&self) -> Option<ContentEvent> {
        self.rx.recv().ok()
    }

    /// Try to receive an event without blocking.
    ///
    /// Returns `None` if no event is available or the sender is dropped.
    #[must_use]
    pub fn try_recv(&self) -> Option<ContentEvent> {
        self.rx.try_recv().ok()
    }

    /// Returns an iterator over events.
    ///
    /// Blocks until an event is available. Stops when the sender is dropped.
    pub fn iter(&self) -> impl Iterator<Item = ContentEvent> + '_ {
        self.rx.iter()
    }
}

/// Handle to stop watching for changes.
///
/// Uses RAII: dropping the handle stops the watch thread. Shutdown is
/// signaled by dropping the internal channel sender.
pub struct WatchHandle {
    _shutdown: Option<mpsc::Sender<()>>,
}

impl WatchHandle {
    pub(crate) fn new(shutdown: mpsc::Sender<()>) -> Self {
        Self {
            _shutdown: Some(shutdown),
        }
    }

    /// Stop watching immediately (consumes the handle).
    pub fn stop(mut self) {
        self._shutdown.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = ContentEvent {
            path: PathBuf::from("projects.yaml"),
            kind: ContentEventKind::Modified,
        };

        assert_eq!(event.path, PathBuf::from("projects.yaml"));
        assert_eq!(event.kind, ContentEventKind::Modified);
    }

    #[test]
    fn test_receiver_recv_blocking() {
        let (tx, rx) = mpsc::channel();
        let receiver = ContentEventReceiver::new(rx);

        let event = ContentEvent {
            path: PathBuf::from("social_links.yaml"),
            kind: ContentEventKind::Created,
        };
        tx.send(event.clone()).unwrap();

        assert_eq!(receiver.recv(), Some(event));
    }

    #[test]
    fn test_receiver_recv_on_closed_channel() {
        let (tx, rx) = mpsc::channel();
        let receiver = ContentEventReceiver::new(rx);

        drop(tx);

        assert!(receiver.recv().is_none());
    }

    #[test]
    fn test_receiver_try_recv_non_blocking() {
        let (_tx, rx) = mpsc::channel();
        let receiver = ContentEventReceiver::new(rx);

        assert!(receiver.try_recv().is_none());
    }

    #[test]
    fn test_receiver_iter_drains_in_order() {
        let (tx, rx) = mpsc::channel();
        let receiver = ContentEventReceiver::new(rx);

        let events = vec![
            ContentEvent {
                path: PathBuf::from("projects.yaml"),
                kind: ContentEventKind::Modified,
            },
            ContentEvent {
                path: PathBuf::from("social_links.yaml"),
                kind: ContentEventKind::Modified,
            },
        ];
        for event in &events {
            tx.send(event.clone()).unwrap();
        }
        drop(tx);

        let received: Vec<_> = receiver.iter().collect();
        assert_eq!(received, events);
    }

    #[test]
    fn test_watch_handle_stop_closes_channel() {
        let (tx, rx) = mpsc::channel();
        let handle = WatchHandle::new(tx);

        handle.stop();

        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_watch_handle_drop_closes_channel() {
        let (tx, rx) = mpsc::channel();
        let handle = WatchHandle::new(tx);

        drop(handle);

        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_handle_and_receiver_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<WatchHandle>();
        assert_send::<ContentEventReceiver>();
    }
}
