//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use folio_content::ContentStore;

use crate::templates::Templates;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content store read on every request.
    pub(crate) store: Arc<ContentStore>,
    /// Compiled template environment.
    pub(crate) templates: Templates,
    /// Page title.
    pub(crate) title: String,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
