//! Static site exporter.
//!
//! Renders every page through the first of its template candidates that
//! exists and writes the result as `index.html` under a directory named
//! after the page URL (`/` goes to `index.html`, `/a/b` to `a/b/index.html`).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use docsite_pages::StaticPage;
use minijinja::{Value, context};
use rayon::prelude::*;
use serde::Serialize;

use crate::markdown::render_markdown;
use crate::{ExportError, Navbar, TemplateSet};

/// Output file name of every page.
const INDEX_FILE: &str = "index.html";

/// Site-wide values exposed to templates as `site`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    /// Site name.
    pub name: String,
    /// URL prefix the site is served under.
    pub base_url: String,
}

/// Page values exposed to templates as `page`.
#[derive(Serialize)]
struct PageContext<'a> {
    url: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    page_type: &'a str,
    title: &'a str,
    content: Value,
    vars: &'a HashMap<String, serde_json::Value>,
}

/// File written for a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    /// Page URL.
    pub url: String,
    /// Template the page was rendered with.
    pub template: String,
    /// Path of the written file.
    pub path: PathBuf,
}

/// Result of an export run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Written files in URL order.
    pub files: Vec<ExportedFile>,
}

impl ExportReport {
    /// Number of written files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Renders pages to static HTML files.
#[derive(Debug)]
pub struct StaticExporter {
    templates: TemplateSet,
    site: SiteInfo,
    navbar: Navbar,
}

impl StaticExporter {
    /// Create an exporter. The navbar shows the site name.
    #[must_use]
    pub fn new(templates: TemplateSet, site: SiteInfo) -> Self {
        let navbar = Navbar::new(site.name.clone());
        Self {
            templates,
            site,
            navbar,
        }
    }

    /// Templates used for rendering.
    #[must_use]
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Pages whose URL is `root` or lies beneath it.
    ///
    /// A root of `/` selects every page.
    #[must_use]
    pub fn pages_under<'a>(pages: &'a [Box<dyn StaticPage>], root: &str) -> Vec<&'a dyn StaticPage> {
        let root = root.trim_end_matches('/');
        pages
            .iter()
            .map(|page| &**page)
            .filter(|page| {
                let url = page.url();
                root.is_empty()
                    || url == root
                    || url.strip_prefix(root).is_some_and(|rest| rest.starts_with('/'))
            })
            .collect()
    }

    /// Render a page to HTML.
    ///
    /// Returns the name of the template used and the rendered output.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NoTemplate`] if no candidate template exists and
    /// [`ExportError::Template`] if rendering fails.
    pub fn render_page(&self, page: &dyn StaticPage) -> Result<(String, String), ExportError> {
        let candidates = page.template_candidates();
        let Some(template) = self.templates.resolve(&candidates) else {
            return Err(ExportError::NoTemplate {
                url: page.url().to_owned(),
                candidates,
            });
        };

        let data = page.data();
        let page_context = PageContext {
            url: page.url(),
            name: page.page_name(),
            page_type: page.page_type(),
            title: page.title(),
            content: Value::from_safe_string(render_markdown(&data.body)),
            vars: &data.vars,
        };
        let context = context! {
            site => &self.site,
            navbar => &self.navbar,
            page => page_context,
            sidebar => page.sidebar(),
            prev_page => page.prev_page(),
            next_page => page.next_page(),
            template => template,
        };

        let html = self.templates.render(template, &context)?;
        Ok((template.to_owned(), html))
    }

    /// Render `pages` in parallel and write them under `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExportError`] met: a page without template, a
    /// rendering failure, a URL outside the output directory, or a write
    /// failure.
    pub fn export(
        &self,
        pages: &[&dyn StaticPage],
        output_dir: &Path,
    ) -> Result<ExportReport, ExportError> {
        fs::create_dir_all(output_dir).map_err(|e| ExportError::io(output_dir, e))?;

        let mut files: Vec<ExportedFile> = pages
            .par_iter()
            .map(|page| self.export_page(*page, output_dir))
            .collect::<Result<_, _>>()?;
        files.sort_by(|a, b| a.url.cmp(&b.url));

        tracing::info!(
            pages = files.len(),
            output_dir = %output_dir.display(),
            "Exported static site"
        );
        Ok(ExportReport { files })
    }

    fn export_page(&self, page: &dyn StaticPage, output_dir: &Path) -> Result<ExportedFile, ExportError> {
        let path = output_path(output_dir, page.url())?;
        let (template, html) = self.render_page(page)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        }
        fs::write(&path, html).map_err(|e| ExportError::io(&path, e))?;
        tracing::debug!(url = %page.url(), template = %template, path = %path.display(), "Wrote page");

        Ok(ExportedFile {
            url: page.url().to_owned(),
            template,
            path,
        })
    }
}

/// Path of the file a page URL is written to.
fn output_path(output_dir: &Path, url: &str) -> Result<PathBuf, ExportError> {
    let mut path = output_dir.to_path_buf();
    for segment in url.split('/').filter(|s| !s.is_empty()) {
        if segment == "." || segment == ".." || segment.contains('\\') {
            return Err(ExportError::InvalidUrl(url.to_owned()));
        }
        path.push(segment);
    }
    path.push(INDEX_FILE);
    Ok(path)
}
