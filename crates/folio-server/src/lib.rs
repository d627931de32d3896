//! HTTP server for the folio portfolio site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - the portfolio page, rendered from the current content snapshot
//! - static assets (stylesheets, images)
//!
//! When watching is enabled, a background watcher observes the content
//! directory and a single consumer thread swaps the in-memory snapshot
//! on each debounced change. A reload failure is logged and the prior
//! snapshot stays in effect; HTTP clients never see it.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8080,
//!         content_dir: PathBuf::from("config"),
//!         templates_dir: PathBuf::from("templates"),
//!         static_dir: PathBuf::from("static"),
//!         title: "My Projects".to_string(),
//!         watch_enabled: true,
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (folio-server)
//!                        │
//!                        ├─► GET /          ──► render snapshot (minijinja)
//!                        ├─► GET /static/*  ──► tower-http ServeDir
//!                        │
//!                        └─► reload thread ◄──channel── ContentWatcher (notify)
//!                                 │
//!                                 └─► ContentStore::reload()
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod reload;
mod state;
mod templates;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use folio_content::ContentStore;

use state::AppState;
pub use templates::Templates;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory containing the content YAML files.
    pub content_dir: PathBuf,
    /// Directory containing HTML templates.
    pub templates_dir: PathBuf,
    /// Directory containing static assets.
    pub static_dir: PathBuf,
    /// Page title.
    pub title: String,
    /// Enable content hot-reload.
    pub watch_enabled: bool,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            content_dir: PathBuf::from("config"),
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            title: "My Projects".to_string(),
            watch_enabled: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// Performs the initial content load (fatal on failure), starts the
/// watcher when enabled, and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the initial load fails, the watcher cannot be
/// started, or the listener cannot bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(ContentStore::load(config.content_dir.clone())?);
    let templates = Templates::from_dir(&config.templates_dir);

    // Keep the reload driver alive for the lifetime of the server; its
    // drop stops the watcher thread.
    let _reload = if config.watch_enabled {
        Some(reload::ContentReload::start(Arc::clone(&store))?)
    } else {
        None
    };

    let state = Arc::new(AppState {
        store,
        templates,
        title: config.title.clone(),
        version: config.version.clone(),
    });

    let router = app::create_router(state, &config.static_dir);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from folio config.
///
/// # Arguments
///
/// * `config` - folio configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &folio_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.site_resolved.content_dir.clone(),
        templates_dir: config.site_resolved.templates_dir.clone(),
        static_dir: config.site_resolved.static_dir.clone(),
        title: config.site_resolved.title.clone(),
        watch_enabled: config.watch.enabled,
        version,
    }
}
