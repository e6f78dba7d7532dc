//! `docsite pages` command implementation.

use clap::Args;
use docsite_config::CliSettings;
use docsite_pages::Link;

use super::{ConfigArgs, load_content};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args, Debug)]
pub(crate) struct PagesArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl PagesArgs {
    /// List every page with its template candidates and neighbors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(CliSettings::default())?;
        let site = load_content(&config)?;

        for page in site.pages() {
            output.heading(page.url());
            output.detail("title", page.title());
            output.detail("type", page.page_type());
            output.detail("templates", &page.template_candidates().join(", "));
            output.detail("prev", &link_label(page.prev_page()));
            output.detail("next", &link_label(page.next_page()));
        }

        output.info(&format!("{} pages", site.pages().len()));
        Ok(())
    }
}

/// Display form of an optional navigation link.
fn link_label(link: Option<&Link>) -> String {
    link.map_or_else(|| "-".to_owned(), |link| format!("{} ({})", link.title, link.url))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_link_label() {
        assert_eq!(link_label(None), "-");
        assert_eq!(
            link_label(Some(&Link::new("/docs/a", "A"))),
            "A (/docs/a)"
        );
    }
}
