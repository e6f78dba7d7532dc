//! Page frontmatter parsing.
//!
//! A page may start with a YAML block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Install
//! sidebar: docs
//! ---
//! # Installing
//! ```

use std::collections::HashMap;

use docsite_nav::SidebarLinkGroups;
use serde::Deserialize;

/// Page settings read from frontmatter. All fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    /// Page type (defaults to `docs`).
    #[serde(rename = "type")]
    pub page_type: Option<String>,
    /// Display title (defaults to the first H1, then the page name).
    pub title: Option<String>,
    /// URL override.
    pub url: Option<String>,
    /// Sidebar shown with the page.
    pub sidebar: Option<SidebarRef>,
    /// Free-form template variables.
    pub vars: HashMap<String, serde_json::Value>,
}

/// Sidebar reference in frontmatter.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SidebarRef {
    /// Name of a sidebar in the sidebar file.
    Named(String),
    /// Sidebar groups written inline.
    Inline(SidebarLinkGroups),
}

impl Frontmatter {
    /// Parse frontmatter YAML. Blank content yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Split a document into its frontmatter block and body.
///
/// Returns `None` for the frontmatter when the document does not open with a
/// `---` line or the block is never closed.
pub(crate) fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, content)
}

/// Extract the text of the first `# ` heading outside fenced code blocks.
pub(crate) fn extract_title(body: &str) -> Option<String> {
    let mut in_fence = false;
    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(title) = trimmed.strip_prefix("# ") {
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_owned());
            }
        }
    }
    None
}
