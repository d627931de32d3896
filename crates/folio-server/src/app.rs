//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `static_dir` - Directory served under `/static`
pub(crate) fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let (csp, content_type_options, frame_options) = security::header_layers();

    Router::new()
        .route("/", get(handlers::index::get_index))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(csp)
                .layer(content_type_options)
                .layer(frame_options),
        )
        .with_state(state)
}
