//! Sidebar data model.
//!
//! A sidebar is an ordered list of titled groups, each holding an ordered
//! list of links. Both orders are significant: together they define the
//! reading sequence used by [`resolve_navigation`](crate::resolve_navigation).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Navigation link to a documentation page.
///
/// Identity is the `url`; the title is display text only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Target URL of the page (e.g., "/docs/install").
    pub url: String,
    /// Display title.
    pub title: String,
}

impl Link {
    /// Create a link.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Titled section of the table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLinkGroup {
    /// Section title.
    pub title: String,
    /// Links in reading order.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl SidebarLinkGroup {
    /// Create a group.
    #[must_use]
    pub fn new(title: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            title: title.into(),
            links,
        }
    }
}

/// Ordered sequence of sidebar groups.
///
/// Serialized as a plain list of groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarLinkGroups(Vec<SidebarLinkGroup>);

impl SidebarLinkGroups {
    /// Groups in order.
    #[must_use]
    pub fn groups(&self) -> &[SidebarLinkGroup] {
        &self.0
    }

    /// Iterate over the flattened reading sequence.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.0.iter().flat_map(|group| group.links.iter())
    }

    /// Total number of links across all groups.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.0.iter().map(|group| group.links.len()).sum()
    }

    /// True if there are no links at all (groups may still exist).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.link_count() == 0
    }

    /// Find URLs that occur more than once in the reading sequence.
    ///
    /// Navigation always resolves to the first occurrence, so later ones
    /// are unreachable as "current page". Results are ordered by the
    /// position of the first occurrence.
    #[must_use]
    pub fn duplicate_urls(&self) -> Vec<DuplicateUrl> {
        let mut positions: HashMap<&str, Vec<LinkPosition>> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for (group_index, group) in self.0.iter().enumerate() {
            for (link_index, link) in group.links.iter().enumerate() {
                let entry = positions.entry(link.url.as_str()).or_default();
                if entry.is_empty() {
                    order.push(link.url.as_str());
                }
                entry.push(LinkPosition {
                    group_index,
                    link_index,
                    group_title: group.title.clone(),
                });
            }
        }

        order
            .into_iter()
            .filter_map(|url| {
                let occurrences = positions.remove(url)?;
                (occurrences.len() > 1).then(|| DuplicateUrl {
                    url: url.to_owned(),
                    occurrences,
                })
            })
            .collect()
    }
}

impl From<Vec<SidebarLinkGroup>> for SidebarLinkGroups {
    fn from(groups: Vec<SidebarLinkGroup>) -> Self {
        Self(groups)
    }
}

impl FromIterator<SidebarLinkGroup> for SidebarLinkGroups {
    fn from_iter<I: IntoIterator<Item = SidebarLinkGroup>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Location of a link inside a sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkPosition {
    /// Index of the group.
    pub group_index: usize,
    /// Index of the link within its group.
    pub link_index: usize,
    /// Title of the group.
    pub group_title: String,
}

/// A URL that appears more than once in a sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateUrl {
    /// The repeated URL.
    pub url: String,
    /// Every occurrence in reading order. The first one wins.
    pub occurrences: Vec<LinkPosition>,
}
