//! CLI command implementations.

mod build;
mod check;
mod pages;

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, Config};
use docsite_content::ContentSite;
use docsite_pages::PageTypeRegistry;

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use pages::PagesArgs;

/// Configuration arguments shared by every command.
#[derive(Args, Debug)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long, env = "DOCSITE_CONFIG")]
    config: Option<PathBuf>,

    /// Configuration file merged over the defaults (e.g. dev.toml, static.toml).
    #[arg(long, env = "DOCSITE_OVERRIDES")]
    overrides: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration, applying `settings` and the source directory override.
    pub(crate) fn load(self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir,
            ..settings
        };
        let config = Config::load(
            self.config.as_deref(),
            self.overrides.as_deref(),
            Some(&settings),
        )?;
        tracing::debug!(files = ?config.config_paths, "Loaded configuration");
        Ok(config)
    }
}

/// Load the content directory named by the configuration.
pub(crate) fn load_content(config: &Config) -> Result<ContentSite, CliError> {
    let site = ContentSite::load(
        &config.content_resolved.source_dir,
        &config.content_resolved.sidebars_path(),
        &PageTypeRegistry::with_defaults(),
    )?;
    Ok(site)
}
