//! Page templates.
//!
//! Templates are HTML files rendered with minijinja. A template is named by
//! its path relative to the templates directory without the `.html`
//! extension (`docs.html` is `docs`, `guide/docs-setup.html` is
//! `guide/docs-setup`). Templates may extend or include each other by name.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use minijinja::{AutoEscape, Environment, Value};

use crate::ExportError;

/// Template file extension.
const TEMPLATE_EXTENSION: &str = ".html";

/// Set of named page templates.
#[derive(Debug)]
pub struct TemplateSet {
    env: Environment<'static>,
    names: BTreeSet<String>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSet {
    /// Create an empty template set.
    ///
    /// Output is HTML-escaped regardless of template name.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        Self {
            env,
            names: BTreeSet::new(),
        }
    }

    /// Load every `*.html` file under `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the directory or a file cannot be read
    /// and [`ExportError::Template`] if a template does not compile.
    pub fn from_dir(dir: &Path) -> Result<Self, ExportError> {
        let mut templates = Self::new();
        templates.load_dir(dir, "")?;
        tracing::debug!(count = templates.names.len(), dir = %dir.display(), "Loaded templates");
        Ok(templates)
    }

    fn load_dir(&mut self, dir: &Path, prefix: &str) -> Result<(), ExportError> {
        let entries = fs::read_dir(dir).map_err(|e| ExportError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| ExportError::io(dir, e))?;
            let path = entry.path();
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if file_name.starts_with('.') {
                continue;
            }

            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.load_dir(&path, &format!("{prefix}{file_name}/"))?;
            } else if let Some(stem) = file_name.strip_suffix(TEMPLATE_EXTENSION) {
                let source = fs::read_to_string(&path).map_err(|e| ExportError::io(&path, e))?;
                self.add(format!("{prefix}{stem}"), source)?;
            }
        }
        Ok(())
    }

    /// Add a template, replacing any template with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Template`] if the source does not compile.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), ExportError> {
        let name = name.into();
        self.env
            .add_template_owned(name.clone(), source.into())
            .map_err(|err| ExportError::Template {
                name: name.clone(),
                source: err,
            })?;
        self.names.insert(name);
        Ok(())
    }

    /// Check if a template exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Template names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if there are no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// First candidate that names an existing template.
    #[must_use]
    pub fn resolve<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        candidates
            .iter()
            .map(String::as_str)
            .find(|name| self.contains(name))
    }

    /// Render a template with the given context.
    pub(crate) fn render(&self, name: &str, context: &Value) -> Result<String, ExportError> {
        let template_error = |source: minijinja::Error| ExportError::Template {
            name: name.to_owned(),
            source,
        };
        self.env
            .get_template(name)
            .and_then(|template| template.render(context))
            .map_err(template_error)
    }
}
