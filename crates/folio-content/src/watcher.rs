//! Content directory watcher.
//!
//! Watches the content directory (non-recursively) with `notify` and
//! delivers debounced [`ContentEvent`]s over a channel. The watcher does
//! not reload anything itself; the receiving side decides what to do
//! with each event.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use glob::Pattern;
use notify::{RecursiveMode, Watcher};

use crate::debouncer::EventDebouncer;
use crate::event::{ContentEvent, ContentEventKind, ContentEventReceiver, WatchHandle};
use crate::loader::ContentError;

/// Debounce window applied to raw filesystem events.
const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Poll interval of the drain thread.
const DRAIN_INTERVAL_MS: u64 = 50;

/// Watches a content directory for changes to its YAML files.
///
/// Only direct children of the directory are observed, and only those
/// matching the file patterns (by default `*.yaml` and `*.yml`). Editor
/// temp files and unrelated writes never reach the channel.
pub struct ContentWatcher {
    dir: PathBuf,
    patterns: Vec<Pattern>,
    debounce: Duration,
}

impl ContentWatcher {
    /// Create a watcher for `dir` with the default YAML patterns.
    ///
    /// # Panics
    ///
    /// Panics if the built-in glob patterns fail to compile. This cannot
    /// happen for the compile-time constants used here.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self::with_patterns(dir, &["*.yaml", "*.yml"])
    }

    /// Create a watcher with custom file patterns.
    ///
    /// Patterns are matched against file names relative to the watched
    /// directory.
    ///
    /// # Panics
    ///
    /// Panics if any pattern is not a valid glob.
    #[must_use]
    pub fn with_patterns(dir: PathBuf, patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p).expect("invalid glob pattern"))
            .collect();

        Self {
            dir,
            patterns,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    /// Override the debounce window.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Start watching.
    ///
    /// Returns the event receiver and an RAII [`WatchHandle`]; dropping
    /// the handle (or calling [`WatchHandle::stop`]) terminates the
    /// watch thread deterministically.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Watch`] if the watch cannot be
    /// established, e.g. when the directory does not exist.
    pub fn watch(&self) -> Result<(ContentEventReceiver, WatchHandle), ContentError> {
        let (event_tx, event_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel();

        let debouncer = Arc::new(EventDebouncer::new(self.debounce));

        let dir = self.dir.clone();
        let patterns = self.patterns.clone();
        let debouncer_for_callback = Arc::clone(&debouncer);

        let mut watcher =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                let Ok(event) = res else { return };

                let kind = match event.kind {
                    notify::EventKind::Create(_) => ContentEventKind::Created,
                    notify::EventKind::Modify(_) => ContentEventKind::Modified,
                    notify::EventKind::Remove(_) => ContentEventKind::Removed,
                    _ => return,
                };

                for path in event.paths {
                    if !matches_patterns(&path, &dir, &patterns) {
                        continue;
                    }
                    tracing::debug!(path = %path.display(), ?kind, "Recorded filesystem event");
                    debouncer_for_callback.record(path, kind);
                }
            })?;

        watcher.watch(&self.dir, RecursiveMode::NonRecursive)?;

        // The watcher must outlive the drain thread; move it there.
        let watcher = Arc::new(Mutex::new(watcher));

        let dir_for_drain = self.dir.clone();
        std::thread::spawn(move || {
            let _watcher_guard = watcher;

            loop {
                // Blocks until the next poll tick or a shutdown signal
                match shutdown_rx.recv_timeout(Duration::from_millis(DRAIN_INTERVAL_MS)) {
                    Ok(()) => break,
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    Err(mpsc::RecvTimeoutError::Timeout) => {}
                }

                for event in debouncer.drain_ready() {
                    let Ok(rel_path) = event.path.strip_prefix(&dir_for_drain) else {
                        continue;
                    };

                    let event = ContentEvent {
                        path: rel_path.to_path_buf(),
                        kind: event.kind,
                    };

                    if event_tx.send(event).is_err() {
                        // Receiver dropped, exit thread
                        return;
                    }
                }
            }
        });

        Ok((
            ContentEventReceiver::new(event_rx),
            WatchHandle::new(shutdown_tx),
        ))
    }
}

/// Check whether a reported path is a matching child of the watched dir.
fn matches_patterns(path: &Path, dir: &Path, patterns: &[Pattern]) -> bool {
    let Ok(relative) = path.strip_prefix(dir) else {
        return false;
    };

    patterns.iter().any(|p| p.matches_path(relative))
}
