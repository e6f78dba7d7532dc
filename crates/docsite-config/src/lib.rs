//! Configuration management for docsite.
//!
//! Parses `docsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Layering
//!
//! Configuration is assembled from up to two files and the command line:
//!
//! 1. a defaults file (explicit path or discovered `docsite.toml`),
//! 2. an optional overrides file, deep-merged over the defaults
//!    (tables merge recursively, other values replace),
//! 3. [`CliSettings`], applied last.
//!
//! Relative paths are resolved against the directory of the defaults file.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.name`
//! - `site.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override templates directory.
    pub templates_dir: Option<PathBuf>,
    /// Override export output directory.
    pub output_dir: Option<PathBuf>,
    /// Override site name.
    pub site_name: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Templates configuration (paths are relative strings from TOML).
    templates: TemplatesConfigRaw,
    /// Export configuration (paths are relative strings from TOML).
    export: ExportConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved templates configuration (set after loading).
    #[serde(skip)]
    pub templates_resolved: TemplatesConfig,
    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Files the configuration was loaded from, in merge order.
    #[serde(skip)]
    pub config_paths: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name shown in the navbar.
    pub name: String,
    /// URL prefix the site is served under (empty, `/path` or absolute URL).
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Documentation".to_owned(),
            base_url: String::new(),
        }
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
    sidebars: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory containing markdown pages.
    pub source_dir: PathBuf,
    /// Sidebar file name inside the source directory.
    pub sidebars: String,
}

impl ContentConfig {
    /// Path of the sidebar file.
    #[must_use]
    pub fn sidebars_path(&self) -> PathBuf {
        self.source_dir.join(&self.sidebars)
    }
}

/// Raw templates configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TemplatesConfigRaw {
    dir: Option<String>,
}

/// Resolved templates configuration with absolute paths.
#[derive(Debug, Default)]
pub struct TemplatesConfig {
    /// Directory containing page templates.
    pub dir: PathBuf,
}

/// Raw export configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    output_dir: Option<String>,
    root: Option<String>,
}

/// Resolved export configuration with absolute paths.
#[derive(Debug)]
pub struct ExportConfig {
    /// Directory the static site is written to.
    pub output_dir: PathBuf,
    /// URL prefix of the pages to export.
    pub root: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("www"),
            root: "/".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.name`").
        field: String,
        /// Error message (e.g., "${`SITE_NAME`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Deep-merge `overlay` into `base`.
///
/// Tables present on both sides are merged recursively; any other value
/// from `overlay` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                merge_tables(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

impl Config {
    /// Load configuration from files with optional CLI settings.
    ///
    /// If `config_path` is provided, loads defaults from that file.
    /// Otherwise, searches for `docsite.toml` in current directory and parents.
    /// If `overrides_path` is provided, its values are merged over the defaults.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit path doesn't exist, parsing fails,
    /// an environment variable is missing, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        overrides_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let defaults = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => Self::discover_config(),
        };

        if let Some(path) = overrides_path
            && !path.exists()
        {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let mut config = if defaults.is_some() || overrides_path.is_some() {
            Self::load_from_files(defaults.as_deref(), overrides_path)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(templates_dir) = &settings.templates_dir {
            self.templates_resolved.dir.clone_from(templates_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.export_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(site_name) = &settings.site_name {
            self.site.name.clone_from(site_name);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfigRaw::default(),
            templates: TemplatesConfigRaw::default(),
            export: ExportConfigRaw::default(),
            content_resolved: ContentConfig {
                source_dir: base.join("content"),
                sidebars: "sidebars.yaml".to_owned(),
            },
            templates_resolved: TemplatesConfig {
                dir: base.join("templates"),
            },
            export_resolved: ExportConfig {
                output_dir: base.join("www"),
                root: "/".to_owned(),
            },
            config_paths: Vec::new(),
        }
    }

    /// Load and merge the defaults and overrides files.
    ///
    /// Paths are resolved against the directory of the defaults file, or of
    /// the overrides file when there are no defaults.
    fn load_from_files(
        defaults_path: Option<&Path>,
        overrides_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut merged = toml::Table::new();
        let mut config_paths = Vec::new();

        for path in defaults_path.into_iter().chain(overrides_path) {
            let content = std::fs::read_to_string(path)?;
            let table: toml::Table = toml::from_str(&content)?;
            merge_tables(&mut merged, table);
            config_paths.push(path.to_path_buf());
        }

        let mut config: Self = toml::Value::Table(merged).try_into()?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = config_paths
            .first()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_paths = config_paths;

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_content()?;
        self.validate_export()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;

        let base_url = &self.site.base_url;
        if !base_url.is_empty()
            && !base_url.starts_with('/')
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "site.base_url must start with /, http:// or https://".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate content configuration.
    fn validate_content(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.content_resolved.sidebars, "content.sidebars")
    }

    /// Validate export configuration.
    fn validate_export(&self) -> Result<(), ConfigError> {
        if !self.export_resolved.root.starts_with('/') {
            return Err(ConfigError::Validation(
                "export.root must start with /".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.name = expand::expand_env(&self.site.name, "site.name")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.content_resolved = ContentConfig {
            source_dir: resolve(self.content.source_dir.as_deref(), "content"),
            sidebars: self
                .content
                .sidebars
                .clone()
                .unwrap_or_else(|| "sidebars.yaml".to_owned()),
        };

        self.templates_resolved = TemplatesConfig {
            dir: resolve(self.templates.dir.as_deref(), "templates"),
        };

        self.export_resolved = ExportConfig {
            output_dir: resolve(self.export.output_dir.as_deref(), "www"),
            root: self.export.root.clone().unwrap_or_else(|| "/".to_owned()),
        };
    }
}
