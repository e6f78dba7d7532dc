//! Export errors.

use std::path::PathBuf;

/// Error returned by the static exporter.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Reading templates or writing output failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Template could not be compiled or rendered.
    #[error("Template error in '{name}': {source}")]
    Template {
        name: String,
        source: minijinja::Error,
    },

    /// None of the page's template candidates exists.
    #[error("No template for page {url} (tried: {})", candidates.join(", "))]
    NoTemplate { url: String, candidates: Vec<String> },

    /// Page URL does not map to a path inside the output directory.
    #[error("Page URL {0} cannot be written to the output directory")]
    InvalidUrl(String),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
