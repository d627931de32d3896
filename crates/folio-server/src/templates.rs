//! HTML template environment.
//!
//! Wraps a minijinja [`Environment`] loading templates from the
//! configured templates directory. The portfolio page is `index.html`,
//! which extends `base.html`; both are scaffolded by `folio init`.

use std::path::Path;

use folio_content::Snapshot;
use minijinja::{Environment, context, path_loader};

/// Compiled template environment.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Create an environment loading templates from `dir`.
    ///
    /// Templates are read lazily per render, so edits to template files
    /// take effect without a restart.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        Self { env }
    }

    /// Render the portfolio page for the given snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] if the template is missing or fails
    /// to render.
    pub fn render_index(&self, title: &str, snapshot: &Snapshot) -> Result<String, minijinja::Error> {
        let template = self.env.get_template("index.html")?;
        template.render(context! {
            title => title,
            projects => &snapshot.projects,
            social_links => &snapshot.social_links,
        })
    }
}
