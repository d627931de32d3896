//! `folio init` command implementation.
//!
//! Scaffolds a new portfolio project tree: configuration, seed content,
//! templates, static assets, and Docker files. Refuses to overwrite an
//! existing project unless `--force` is given.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Seed `folio.toml`.
const FOLIO_TOML: &str = r#"[server]
host = "0.0.0.0"
port = 8080

[site]
content_dir = "config"
templates_dir = "templates"
static_dir = "static"
title = "My Projects"

[watch]
enabled = true
"#;

/// Seed projects document.
const PROJECTS_YAML: &str = r#"projects:
  - name: "Nano Block Explorer"
    description: "A block explorer for the Nano cryptocurrency."
    url: "https://nanoblockexplorer.example.com"
    image: "images/block_explorer.png"
  - name: "Nano Monitoring Tool"
    description: "Real-time monitoring for the Nano network."
    url: "https://nanomonitor.example.com"
    image: "images/monitoring_tool.png"
"#;

/// Seed social links document.
const SOCIAL_LINKS_YAML: &str = r#"social_links:
  - platform: "GitHub"
    url: "https://github.com/example"
    icon: "images/github_icon.png"
  - platform: "Twitter"
    url: "https://twitter.com/example"
    icon: "images/twitter_icon.png"
"#;

/// Base page template.
const BASE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/static/css/styles.css">
</head>
<body>
    {% block content %}{% endblock %}
    <footer>
        {% for link in social_links %}
            <a href="{{ link.url }}"><img src="/static/{{ link.icon }}" alt="{{ link.platform }}"></a>
        {% endfor %}
    </footer>
</body>
</html>
"#;

/// Portfolio page template.
const INDEX_HTML: &str = r#"{% extends "base.html" %}
{% block content %}
<h1>{{ title }}</h1>
<div class="projects">
    {% for project in projects %}
    <div class="project">
        {% if project.image %}
        <img src="/static/{{ project.image }}" alt="{{ project.name }}">
        {% endif %}
        <h2>{{ project.name }}</h2>
        <p>{{ project.description }}</p>
        <a href="{{ project.url }}">Learn More</a>
    </div>
    {% endfor %}
</div>
{% endblock %}
"#;

/// Seed stylesheet.
const STYLES_CSS: &str = r#"body {
    font-family: 'Roboto', sans-serif;
    margin: 0;
    padding: 0;
}

.projects {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-around;
}

.project {
    width: 300px;
    margin: 20px;
    text-align: center;
}

.project img {
    max-width: 100%;
    height: auto;
}

footer {
    text-align: center;
    padding: 20px;
}

footer a {
    margin: 0 10px;
}

footer img {
    width: 32px;
    height: 32px;
}
"#;

/// Seed Dockerfile.
const DOCKERFILE: &str = r#"FROM rust:1.88-slim AS build
RUN cargo install folio

FROM debian:bookworm-slim
COPY --from=build /usr/local/cargo/bin/folio /usr/local/bin/folio
WORKDIR /site
COPY . .
EXPOSE 8080
CMD ["folio", "serve"]
"#;

/// Seed docker-compose file.
const DOCKER_COMPOSE_YML: &str = r#"services:
  web:
    build: .
    volumes:
      - ./config:/site/config
    ports:
      - "8080:8080"
"#;

/// Seed .dockerignore.
const DOCKERIGNORE: &str = ".git\n";

/// Image placeholders created empty, to be replaced by real assets.
const IMAGE_PLACEHOLDERS: [&str; 4] = [
    "static/images/block_explorer.png",
    "static/images/monitoring_tool.png",
    "static/images/github_icon.png",
    "static/images/twitter_icon.png",
];

/// Scaffold files as (relative path, content) pairs.
const SCAFFOLD: [(&str, &str); 9] = [
    ("folio.toml", FOLIO_TOML),
    ("config/projects.yaml", PROJECTS_YAML),
    ("config/social_links.yaml", SOCIAL_LINKS_YAML),
    ("templates/base.html", BASE_HTML),
    ("templates/index.html", INDEX_HTML),
    ("static/css/styles.css", STYLES_CSS),
    ("Dockerfile", DOCKERFILE),
    ("docker-compose.yml", DOCKER_COMPOSE_YML),
    (".dockerignore", DOCKERIGNORE),
];

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Directory to scaffold into (default: current directory).
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Overwrite existing project files.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    /// Execute the init command.
    ///
    /// # Errors
    ///
    /// Returns an error if project files already exist (without
    /// `--force`) or a file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        scaffold_project(&self.dir, self.force)?;

        output.success(&format!(
            "Initialized portfolio project in {}",
            self.dir.display()
        ));
        output.info("Next: folio serve");

        Ok(())
    }
}

/// Write the scaffold tree into `dir`.
///
/// # Errors
///
/// Returns [`CliError::Init`] listing the conflicting files when the
/// target already contains scaffold files and `force` is not set.
fn scaffold_project(dir: &Path, force: bool) -> Result<(), CliError> {
    if !force {
        let existing: Vec<_> = SCAFFOLD
            .iter()
            .map(|(path, _)| path)
            .filter(|path| dir.join(path).exists())
            .collect();

        if !existing.is_empty() {
            let listed = existing
                .iter()
                .map(|p| (*p).to_owned())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CliError::Init(format!(
                "Existing project files detected ({listed}); use --force to overwrite"
            )));
        }
    }

    for (path, content) in SCAFFOLD {
        write_file(&dir.join(path), content)?;
    }

    // Placeholders are only seeded once; a real image is never clobbered
    for path in IMAGE_PLACEHOLDERS {
        let target = dir.join(path);
        if !target.exists() {
            write_file(&target, "")?;
        }
    }

    Ok(())
}

/// Write a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
