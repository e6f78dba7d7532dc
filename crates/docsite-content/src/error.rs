//! Content loading errors.

use std::path::PathBuf;

/// Error returned while loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// File or directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Sidebar file or page frontmatter is not valid YAML.
    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Page refers to a sidebar missing from the sidebar file.
    #[error("Page '{page}' refers to unknown sidebar '{sidebar}'")]
    UnknownSidebar { page: String, sidebar: String },

    /// Two pages resolve to the same URL.
    #[error("Pages '{first}' and '{second}' both resolve to URL {url}")]
    DuplicatePageUrl {
        url: String,
        first: String,
        second: String,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
