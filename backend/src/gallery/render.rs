//! Gallery page rendering with `minijinja`

use std::path::{Path, PathBuf};

use minijinja::Environment;
use thiserror::Error;

use super::page::PageModel;

/// Errors raised while rendering the gallery page
#[derive(Error, Debug)]
pub enum RenderError {
    /// The template file could not be read
    #[error("Failed to read template {path}: {source}")]
    Read {
        /// Template path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The template failed to parse or execute
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Whether `i + plus` is an exact multiple of `base`
///
/// Exposed to templates as `is_div` to place row breaks. A zero `base` never divides.
#[must_use]
pub fn is_div(i: i64, base: i64, plus: i64) -> bool {
    (i + plus).checked_rem(base) == Some(0)
}

/// Renders the gallery page from a template file
///
/// The template is read and parsed on every call so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    template_path: PathBuf,
}

impl PageRenderer {
    /// Creates a renderer for the template at `template_path`
    #[must_use]
    pub fn new(template_path: impl AsRef<Path>) -> Self {
        Self {
            template_path: template_path.as_ref().to_path_buf(),
        }
    }

    /// Renders `model` to HTML
    ///
    /// Templates with an `.html` file name are auto-escaped.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Read` if the template cannot be read and
    /// `RenderError::Template` if it fails to parse or execute
    pub async fn render(&self, model: &PageModel) -> Result<String, RenderError> {
        let source = tokio::fs::read_to_string(&self.template_path)
            .await
            .map_err(|source| RenderError::Read {
                path: self.template_path.display().to_string(),
                source,
            })?;

        let name = self
            .template_path
            .file_name()
            .map_or_else(|| "index.html".to_string(), |n| n.to_string_lossy().into_owned());

        let mut env = Environment::new();
        env.add_function("is_div", is_div);
        env.add_template_owned(name.clone(), source)?;

        let html = env.get_template(&name)?.render(model)?;
        Ok(html)
    }
}
