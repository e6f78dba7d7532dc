//! Named sidebars loaded from the sidebar file.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use docsite_nav::{DuplicateUrl, SidebarLinkGroups};
use serde::Deserialize;

use crate::ContentError;

/// Sidebars keyed by name.
///
/// ```yaml
/// docs:
///   - title: Guide
///     links:
///       - { url: /docs/install, title: Install }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Sidebars(BTreeMap<String, SidebarLinkGroups>);

impl Sidebars {
    /// Load sidebars from a YAML file.
    ///
    /// A missing file yields no sidebars. Duplicate URLs inside a sidebar are
    /// logged as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the file exists but cannot be read and
    /// [`ContentError::Yaml`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No sidebar file");
                return Ok(Self::default());
            }
            Err(e) => return Err(ContentError::io(path, e)),
        };

        let sidebars = Self::from_yaml(&content).map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

        for (name, duplicate) in sidebars.duplicate_urls() {
            warn_duplicate(name, &duplicate);
        }
        tracing::debug!(count = sidebars.len(), "Loaded sidebars");

        Ok(sidebars)
    }

    /// Parse sidebars from YAML. Blank content yields no sidebars.
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

    /// Look up a sidebar by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SidebarLinkGroups> {
        self.0.get(name)
    }

    /// Iterate over sidebars in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SidebarLinkGroups)> {
        self.0.iter().map(|(name, groups)| (name.as_str(), groups))
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Duplicate URLs of every sidebar, paired with the sidebar name.
    #[must_use]
    pub fn duplicate_urls(&self) -> Vec<(&str, DuplicateUrl)> {
        self.iter()
            .flat_map(|(name, groups)| {
                groups
                    .duplicate_urls()
                    .into_iter()
                    .map(move |duplicate| (name, duplicate))
            })
            .collect()
    }
}

impl FromIterator<(String, SidebarLinkGroups)> for Sidebars {
    fn from_iter<I: IntoIterator<Item = (String, SidebarLinkGroups)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Log a duplicate URL found in a sidebar.
pub(crate) fn warn_duplicate(sidebar: &str, duplicate: &DuplicateUrl) {
    let groups: Vec<&str> = duplicate
        .occurrences
        .iter()
        .map(|position| position.group_title.as_str())
        .collect();
    tracing::warn!(
        sidebar,
        url = %duplicate.url,
        count = duplicate.occurrences.len(),
        groups = ?groups,
        "Duplicate URL in sidebar, navigation uses the first occurrence"
    );
}

#[cfg(test)]
mod tests {
    use docsite_nav::Link;
    use pretty_assertions::assert_eq;

    use super::*;

    const SIDEBARS: &str = r"
docs:
  - title: Guide
    links:
      - { url: /docs/install, title: Install }
      - { url: /docs/usage, title: Usage }
  - title: Reference
    links:
      - { url: /docs/api, title: API }
blog:
  - title: Posts
";

    #[test]
    fn test_from_yaml() {
        let sidebars = Sidebars::from_yaml(SIDEBARS).unwrap();

        assert_eq!(sidebars.len(), 2);
        let docs = sidebars.get("docs").unwrap();
        assert_eq!(docs.groups().len(), 2);
        assert_eq!(docs.links().last(), Some(&Link::new("/docs/api", "API")));
        assert!(sidebars.get("blog").unwrap().is_empty());
        assert!(sidebars.get("missing").is_none());
    }

    #[test]
    fn test_iter_in_name_order() {
        let sidebars = Sidebars::from_yaml(SIDEBARS).unwrap();

        let names: Vec<&str> = sidebars.iter().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["blog", "docs"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let sidebars = Sidebars::load(&dir.path().join("sidebars.yaml")).unwrap();

        assert!(sidebars.is_empty());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebars.yaml");
        std::fs::write(&path, SIDEBARS).unwrap();

        let sidebars = Sidebars::load(&path).unwrap();

        assert_eq!(sidebars, Sidebars::from_yaml(SIDEBARS).unwrap());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebars.yaml");
        std::fs::write(&path, "docs: [ {url: ").unwrap();

        let err = Sidebars::load(&path).unwrap_err();

        assert!(matches!(err, ContentError::Yaml { .. }));
        assert!(err.to_string().contains("sidebars.yaml"));
    }

    #[test]
    fn test_duplicate_urls_by_sidebar() {
        let yaml = r"
a:
  - title: G
    links:
      - { url: /x, title: X }
      - { url: /x, title: X again }
b:
  - title: H
    links:
      - { url: /x, title: X }
";
        let sidebars = Sidebars::from_yaml(yaml).unwrap();

        let duplicates = sidebars.duplicate_urls();

        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].0, "a");
        assert_eq!(duplicates[0].1.url, "/x");
        assert_eq!(duplicates[0].1.occurrences.len(), 2);
    }
}
