//! `docsite build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::CliSettings;
use docsite_export::{SiteInfo, StaticExporter, TemplateSet};

use super::{ConfigArgs, load_content};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args, Debug)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Templates directory (overrides config).
    #[arg(short, long)]
    templates_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Site name shown in the navbar (overrides config).
    #[arg(long)]
    site_name: Option<String>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, content, templates or export fail.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            templates_dir: self.templates_dir,
            output_dir: self.output_dir,
            site_name: self.site_name,
            ..CliSettings::default()
        };
        let config = self.config.load(cli_settings)?;

        let output_dir = &config.export_resolved.output_dir;
        output.info(&format!(
            "Source: {}",
            config.content_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Templates: {}",
            config.templates_resolved.dir.display()
        ));
        output.info(&format!("Output: {}", output_dir.display()));

        let site = load_content(&config)?;
        let templates = TemplateSet::from_dir(&config.templates_resolved.dir)?;
        let exporter = StaticExporter::new(
            templates,
            SiteInfo {
                name: config.site.name.clone(),
                base_url: config.site.base_url.clone(),
            },
        );

        let pages = StaticExporter::pages_under(site.pages(), &config.export_resolved.root);
        let report = exporter.export(&pages, output_dir)?;

        output.success(&format!(
            "Built {} pages to {}",
            report.len(),
            output_dir.display()
        ));
        Ok(())
    }
}
