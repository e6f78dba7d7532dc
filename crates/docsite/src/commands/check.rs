//! `docsite check` command implementation.

use clap::Args;
use docsite_config::CliSettings;
use docsite_content::ContentSite;

use super::{ConfigArgs, load_content};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Fail when any warning is found.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Content errors (unknown sidebars, duplicate page URLs) fail the
    /// command. Sidebar warnings fail it only with `--strict`.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(CliSettings::default())?;
        let site = load_content(&config)?;

        let warnings = sidebar_warnings(&site);
        for warning in &warnings {
            output.warning(warning);
        }

        let pages = site.pages().len();
        if warnings.is_empty() {
            output.success(&format!("Checked {pages} pages, no problems found"));
            return Ok(());
        }

        let summary = format!("Checked {pages} pages, {} warning(s)", warnings.len());
        if self.strict {
            return Err(CliError::Check(summary));
        }
        output.warning(&summary);
        Ok(())
    }
}

/// Duplicate and dangling links of named and inline sidebars.
fn sidebar_warnings(site: &ContentSite) -> Vec<String> {
    let duplicates = site.duplicate_urls().into_iter().map(|(origin, duplicate)| {
        format!(
            "{origin}: {} is listed {} times, navigation uses the first",
            duplicate.url,
            duplicate.occurrences.len()
        )
    });
    let dangling = site.dangling_links().into_iter().map(|dangling| {
        format!(
            "{} ({}): link '{}' points to missing page {}",
            dangling.sidebar, dangling.group_title, dangling.link.title, dangling.link.url
        )
    });
    duplicates.chain(dangling).collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Content directory whose only page has an inline sidebar with a
    /// duplicate and a dangling link.
    fn inline_sidebar_site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docsite.toml", "");
        write(
            dir.path(),
            "content/a.md",
            "---\nsidebar:\n  - title: G\n    links:\n      - { url: /a, title: A }\n      - { url: /missing, title: Missing }\n      - { url: /a, title: A again }\n---\n# A\n",
        );
        dir
    }

    fn check_args(dir: &Path, strict: bool) -> CheckArgs {
        CheckArgs {
            config: ConfigArgs {
                config: Some(dir.join("docsite.toml")),
                overrides: None,
                source_dir: Some(dir.join("content")),
            },
            strict,
        }
    }

    #[test]
    fn test_sidebar_warnings_include_inline_sidebars() {
        let dir = inline_sidebar_site();
        let args = check_args(dir.path(), false);
        let config = args.config.load(CliSettings::default()).unwrap();
        let site = load_content(&config).unwrap();

        assert_eq!(
            sidebar_warnings(&site),
            vec![
                "inline sidebar of page 'a': /a is listed 2 times, navigation uses the first"
                    .to_owned(),
                "inline sidebar of page 'a' (G): link 'Missing' points to missing page /missing"
                    .to_owned(),
            ]
        );
    }

    #[test]
    fn test_strict_check_fails_on_inline_sidebar_problems() {
        let dir = inline_sidebar_site();

        let err = check_args(dir.path(), true).execute().unwrap_err();

        assert!(matches!(&err, CliError::Check(summary) if summary.contains("2 warning(s)")));
    }

    #[test]
    fn test_lenient_check_passes_with_warnings() {
        let dir = inline_sidebar_site();

        assert!(check_args(dir.path(), false).execute().is_ok());
    }

    #[test]
    fn test_check_clean_site() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docsite.toml", "");
        write(
            dir.path(),
            "content/sidebars.yaml",
            "docs:\n  - title: G\n    links:\n      - { url: /a, title: A }\n      - { url: /b, title: B }\n",
        );
        write(dir.path(), "content/a.md", "---\nsidebar: docs\n---\n");
        write(dir.path(), "content/b.md", "---\nsidebar: docs\n---\n");

        assert!(check_args(dir.path(), true).execute().is_ok());
    }
}
