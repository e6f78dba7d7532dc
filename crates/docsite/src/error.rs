//! CLI error types.

use docsite_config::ConfigError;
use docsite_content::ContentError;
use docsite_export::ExportError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("{0}")]
    Check(String),
}
