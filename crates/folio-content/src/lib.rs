//! Content store and hot-reload watcher for folio.
//!
//! This crate owns the in-memory representation of the portfolio content
//! (projects and social links) and keeps it in sync with the YAML files
//! on disk:
//!
//! - [`load_content`] parses `projects.yaml` and `social_links.yaml` into
//!   a [`Snapshot`]
//! - [`ContentStore`] holds the current snapshot behind a single
//!   synchronization point and swaps it wholesale on reload
//! - [`ContentWatcher`] observes the content directory and delivers
//!   debounced change events over a channel
//!
//! The watcher never touches the store itself: it only sends
//! [`ContentEvent`]s. A single consumer (the server) receives them and
//! calls [`ContentStore::reload`], so event delivery stays decoupled
//! from reload execution.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_content::{ContentStore, ContentWatcher};
//!
//! let store = ContentStore::load(PathBuf::from("config"))?;
//! let (rx, handle) = ContentWatcher::new(store.content_dir().to_path_buf()).watch()?;
//! for _event in rx.iter() {
//!     if let Err(e) = store.reload() {
//!         tracing::warn!(error = %e, "Reload failed, keeping previous content");
//!     }
//! }
//! ```

mod debouncer;
mod event;
mod loader;
mod records;
mod store;
mod watcher;

pub use event::{ContentEvent, ContentEventKind, ContentEventReceiver, WatchHandle};
pub use loader::{ContentError, PROJECTS_FILE, SOCIAL_LINKS_FILE, load_content};
pub use records::{Project, Snapshot, SocialLink};
pub use store::ContentStore;
pub use watcher::ContentWatcher;
