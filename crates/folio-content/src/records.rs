//! Content record types.
//!
//! Plain value types deserialized from the content YAML files. Records
//! have no identity beyond their position in the list and no uniqueness
//! constraint. Missing fields deserialize to empty strings: a half-edited
//! file degrades the rendered page instead of failing the reload.

use serde::{Deserialize, Serialize};

/// A portfolio project entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// External project URL.
    pub url: String,
    /// Image path, relative to the static assets directory.
    pub image: String,
}

/// A social link entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Platform name (e.g., "GitHub").
    pub platform: String,
    /// External profile URL.
    pub url: String,
    /// Icon path, relative to the static assets directory.
    pub icon: String,
}

/// The in-memory content state: both record lists, replaced as a unit.
///
/// A reload produces a whole new snapshot; there is no diffing, merging,
/// or rollback. Equality is by value, so an unchanged reload yields a
/// snapshot equal to the prior one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Portfolio projects, in file order.
    pub projects: Vec<Project>,
    /// Social links, in file order.
    pub social_links: Vec<SocialLink>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_project_deserialize_full() {
        let yaml = r#"
name: "Nano Block Explorer"
description: "A block explorer for the Nano cryptocurrency."
url: "https://nanoblockexplorer.example.com"
image: "images/block_explorer.png"
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(project.name, "Nano Block Explorer");
        assert_eq!(
            project.description,
            "A block explorer for the Nano cryptocurrency."
        );
        assert_eq!(project.url, "https://nanoblockexplorer.example.com");
        assert_eq!(project.image, "images/block_explorer.png");
    }

    #[test]
    fn test_project_missing_fields_default_to_empty() {
        let yaml = r#"
name: "Bare Project"
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(project.name, "Bare Project");
        assert_eq!(project.description, "");
        assert_eq!(project.url, "");
        assert_eq!(project.image, "");
    }

    #[test]
    fn test_social_link_deserialize() {
        let yaml = r#"
platform: "GitHub"
url: "https://github.com/example"
icon: "images/github_icon.png"
"#;
        let link: SocialLink = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(link.platform, "GitHub");
        assert_eq!(link.url, "https://github.com/example");
        assert_eq!(link.icon, "images/github_icon.png");
    }

    #[test]
    fn test_snapshot_equality_by_value() {
        let a = Snapshot {
            projects: vec![Project {
                name: "P".to_owned(),
                ..Default::default()
            }],
            social_links: vec![],
        };
        let b = a.clone();

        assert_eq!(a, b);
    }

    #[test]
    fn test_snapshot_inequality_on_field_change() {
        let a = Snapshot {
            projects: vec![Project {
                name: "P".to_owned(),
                ..Default::default()
            }],
            social_links: vec![],
        };
        let mut b = a.clone();
        b.projects[0].url = "https://example.com".to_owned();

        assert_ne!(a, b);
    }
}
