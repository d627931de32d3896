//! Content reload driver.
//!
//! Bridges the watcher channel to the store: a single consumer thread
//! receives debounced events and performs the snapshot swap. Keeping the
//! consumer separate from the watcher means event delivery never blocks
//! on a slow reload, and reloads never interleave.

use std::sync::Arc;

use folio_content::{ContentError, ContentStore, ContentWatcher, WatchHandle};

/// Running reload driver.
///
/// Dropping it stops the watcher thread; the consumer thread then exits
/// once the event channel drains.
pub(crate) struct ContentReload {
    _handle: WatchHandle,
}

impl ContentReload {
    /// Start watching the store's content directory.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Watch`] if the watch cannot be
    /// established, e.g. when the content directory does not exist.
    pub(crate) fn start(store: Arc<ContentStore>) -> Result<Self, ContentError> {
        let watcher = ContentWatcher::new(store.content_dir().to_path_buf());
        let (rx, handle) = watcher.watch()?;

        let consumer_store = Arc::clone(&store);
        std::thread::spawn(move || {
            for event in rx.iter() {
                tracing::debug!(
                    path = %event.path.display(),
                    kind = ?event.kind,
                    "Content change detected"
                );

                // A failed reload keeps the previous snapshot; the next
                // filesystem event retriggers the attempt.
                if let Err(error) = consumer_store.reload() {
                    tracing::warn!(%error, "Content reload failed, keeping previous snapshot");
                }
            }
        });

        tracing::info!(
            dir = %store.content_dir().display(),
            "Content watcher started"
        );

        Ok(Self { _handle: handle })
    }
}
