//! Content file loading.
//!
//! Parses the two content documents into a [`Snapshot`]. Each document is
//! a mapping with a single top-level key (`projects` / `social_links`)
//! wrapping a sequence of records; a missing file, malformed YAML, or
//! missing key is a [`ContentError`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::records::{Project, Snapshot, SocialLink};

/// Filename of the projects document.
pub const PROJECTS_FILE: &str = "projects.yaml";

/// Filename of the social links document.
pub const SOCIAL_LINKS_FILE: &str = "social_links.yaml";

/// Content loading error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Content file is malformed or missing its top-level key.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// Filesystem watch could not be established.
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Top-level document shape of `projects.yaml`.
#[derive(Deserialize)]
struct ProjectsDocument {
    projects: Vec<Project>,
}

/// Top-level document shape of `social_links.yaml`.
#[derive(Deserialize)]
struct SocialLinksDocument {
    social_links: Vec<SocialLink>,
}

/// Load both content documents from `dir` into a fresh [`Snapshot`].
///
/// Extra top-level keys are ignored; a missing `projects` /
/// `social_links` key is a parse error.
///
/// # Errors
///
/// Returns [`ContentError`] if either file is missing, unreadable,
/// malformed, or missing its expected top-level key.
pub fn load_content(dir: &Path) -> Result<Snapshot, ContentError> {
    let projects: ProjectsDocument = read_document(&dir.join(PROJECTS_FILE))?;
    let links: SocialLinksDocument = read_document(&dir.join(SOCIAL_LINKS_FILE))?;

    tracing::debug!(
        projects = projects.projects.len(),
        social_links = links.social_links.len(),
        dir = %dir.display(),
        "Content loaded"
    );

    Ok(Snapshot {
        projects: projects.projects,
        social_links: links.social_links,
    })
}

/// Read and deserialize a single YAML document.
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let text = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&text).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
