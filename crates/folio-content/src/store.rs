//! Snapshot store.
//!
//! Holds the current [`Snapshot`] behind a single synchronization point
//! so readers always observe a fully-formed pair of lists, never a torn
//! one.
//!
//! # Thread Safety
//!
//! - `get()` returns `Arc<Snapshot>` with minimal locking (just an Arc
//!   clone under a read lock)
//! - `reload()` operations are serialized by an internal mutex
//! - a failed reload leaves the prior snapshot in place

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use crate::loader::{ContentError, load_content};
use crate::records::Snapshot;

/// Holds the current content snapshot and exposes a reload operation.
///
/// The store is the single owner of the in-memory content. The serving
/// path reads it through [`get`](Self::get); the reload consumer mutates
/// it through [`reload`](Self::reload). Every reload replaces the
/// snapshot wholesale.
pub struct ContentStore {
    content_dir: PathBuf,
    /// Serializes reload operations.
    reload_lock: Mutex<()>,
    /// Current snapshot (atomically swappable).
    current: RwLock<Arc<Snapshot>>,
}

impl ContentStore {
    /// Create a store by performing the initial load from `content_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the initial load fails. Startup is the
    /// one place where a load failure is fatal.
    pub fn load(content_dir: PathBuf) -> Result<Self, ContentError> {
        let snapshot = load_content(&content_dir)?;
        Ok(Self::with_snapshot(content_dir, snapshot))
    }

    /// Create a store from an already-loaded snapshot.
    #[must_use]
    pub fn with_snapshot(content_dir: PathBuf, snapshot: Snapshot) -> Self {
        Self {
            content_dir,
            reload_lock: Mutex::new(()),
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Get the current snapshot.
    ///
    /// Returns an `Arc<Snapshot>` that can be used without holding any
    /// lock. The snapshot is guaranteed to be internally consistent.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self) -> Arc<Snapshot> {
        self.current.read().unwrap().clone()
    }

    /// Re-parse both content files and swap the snapshot.
    ///
    /// Concurrent callers are serialized; readers see either the prior or
    /// the new snapshot, never a mix. On failure the prior snapshot
    /// remains in effect, so a broken file on disk degrades to
    /// stale-but-valid content.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if either file is missing, unreadable, or
    /// malformed.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn reload(&self) -> Result<(), ContentError> {
        let _guard = self.reload_lock.lock().unwrap();
        let start = Instant::now();

        let snapshot = Arc::new(load_content(&self.content_dir)?);

        let projects = snapshot.projects.len();
        let social_links = snapshot.social_links.len();
        *self.current.write().unwrap() = snapshot;

        tracing::info!(
            projects,
            social_links,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Content reloaded"
        );

        Ok(())
    }

    /// Directory the content files are loaded from.
    #[must_use]
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
}
