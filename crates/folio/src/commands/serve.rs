//! `folio serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory with the YAML files (overrides config).
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (show reload timing logs).
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable content hot-reload (default: enabled).
    #[arg(long)]
    watch: Option<bool>,

    /// Disable content hot-reload.
    #[arg(long, conflicts_with = "watch")]
    no_watch: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Resolve flags before moving into CliSettings
        let watch_enabled = self.resolve_watch_enabled();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
            watch_enabled,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content directory: {}",
            config.site_resolved.content_dir.display()
        ));
        output.info(&format!(
            "Templates directory: {}",
            config.site_resolved.templates_dir.display()
        ));

        if config.watch.enabled {
            output.info("Content hot-reload: enabled");
        } else {
            output.info("Content hot-reload: disabled");
        }

        // Build server config and run
        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Resolve `watch_enabled` from --watch/--no-watch flags.
    fn resolve_watch_enabled(&self) -> Option<bool> {
        self.no_watch.then_some(false).or(self.watch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(watch: Option<bool>, no_watch: bool) -> ServeArgs {
        ServeArgs {
            config: None,
            content_dir: None,
            host: None,
            port: None,
            verbose: false,
            watch,
            no_watch,
        }
    }

    #[test]
    fn test_resolve_watch_enabled_default() {
        assert_eq!(args(None, false).resolve_watch_enabled(), None);
    }

    #[test]
    fn test_resolve_watch_enabled_no_watch_wins() {
        assert_eq!(args(None, true).resolve_watch_enabled(), Some(false));
    }

    #[test]
    fn test_resolve_watch_enabled_explicit() {
        assert_eq!(args(Some(true), false).resolve_watch_enabled(), Some(true));
        assert_eq!(
            args(Some(false), false).resolve_watch_enabled(),
            Some(false)
        );
    }
}
