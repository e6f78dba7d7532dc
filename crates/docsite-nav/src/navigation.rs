//! Previous/next page resolution.
//!
//! Locates the current page in the flattened reading sequence of a sidebar
//! and returns its immediate neighbors. Group boundaries and empty groups
//! are transparent.

use serde::Serialize;

use crate::sidebar::{Link, SidebarLinkGroups};

/// Immediate neighbors of a page in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageNeighbors {
    /// Link scanned immediately before the current page.
    pub prev: Option<Link>,
    /// Link scanned immediately after the current page.
    pub next: Option<Link>,
}

impl PageNeighbors {
    /// True if the page has neither a previous nor a next page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

/// Resolve the previous and next page for `current_url`.
///
/// Performs a single pass over the flattened reading sequence and stops at
/// the link following the first match. When the URL occurs more than once,
/// the first occurrence wins. An absent sidebar or a URL that is not listed
/// yields empty neighbors.
#[must_use]
pub fn resolve_navigation(groups: Option<&SidebarLinkGroups>, current_url: &str) -> PageNeighbors {
    let Some(groups) = groups else {
        return PageNeighbors::default();
    };

    let mut links = groups.links();
    let mut previous: Option<&Link> = None;

    while let Some(link) = links.next() {
        if link.url == current_url {
            return PageNeighbors {
                prev: previous.cloned(),
                next: links.next().cloned(),
            };
        }
        previous = Some(link);
    }

    PageNeighbors::default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sidebar::SidebarLinkGroup;

    static_assertions::assert_impl_all!(PageNeighbors: Send, Sync);
    static_assertions::assert_impl_all!(SidebarLinkGroups: Send, Sync);

    fn link(url: &str, title: &str) -> Link {
        Link::new(url, title)
    }

    fn guide_and_ref() -> SidebarLinkGroups {
        SidebarLinkGroups::from(vec![
            SidebarLinkGroup::new("Guide", vec![link("/a", "A"), link("/b", "B")]),
            SidebarLinkGroup::new("Ref", vec![link("/c", "C")]),
        ])
    }

    #[test]
    fn test_missing_sidebar_yields_nothing() {
        for url in ["/", "/a", ""] {
            assert_eq!(resolve_navigation(None, url), PageNeighbors::default());
        }
    }

    #[test]
    fn test_empty_sidebar_yields_nothing() {
        let groups = SidebarLinkGroups::default();

        let neighbors = resolve_navigation(Some(&groups), "/a");

        assert!(neighbors.is_empty());
    }

    #[test]
    fn test_unknown_url_yields_nothing() {
        let groups = guide_and_ref();

        let neighbors = resolve_navigation(Some(&groups), "/z");

        assert_eq!(neighbors, PageNeighbors::default());
    }

    #[test]
    fn test_middle_link_crosses_group_boundary() {
        let groups = guide_and_ref();

        let neighbors = resolve_navigation(Some(&groups), "/b");

        assert_eq!(neighbors.prev, Some(link("/a", "A")));
        assert_eq!(neighbors.next, Some(link("/c", "C")));
    }

    #[test]
    fn test_first_link_has_no_prev() {
        let groups = guide_and_ref();

        let neighbors = resolve_navigation(Some(&groups), "/a");

        assert_eq!(neighbors.prev, None);
        assert_eq!(neighbors.next, Some(link("/b", "B")));
    }

    #[test]
    fn test_last_link_has_no_next() {
        let groups = guide_and_ref();

        let neighbors = resolve_navigation(Some(&groups), "/c");

        assert_eq!(neighbors.prev, Some(link("/b", "B")));
        assert_eq!(neighbors.next, None);
    }

    #[test]
    fn test_single_link_has_no_neighbors() {
        let groups =
            SidebarLinkGroups::from(vec![SidebarLinkGroup::new("Only", vec![link("/a", "A")])]);

        let neighbors = resolve_navigation(Some(&groups), "/a");

        assert!(neighbors.is_empty());
    }

    #[test]
    fn test_prev_comes_from_earlier_group() {
        let groups = SidebarLinkGroups::from(vec![
            SidebarLinkGroup::new("A", vec![link("/1", "One"), link("/2", "Two")]),
            SidebarLinkGroup::new("B", vec![link("/3", "Three"), link("/4", "Four")]),
        ]);

        let neighbors = resolve_navigation(Some(&groups), "/3");

        assert_eq!(neighbors.prev, Some(link("/2", "Two")));
        assert_eq!(neighbors.next, Some(link("/4", "Four")));
    }

    #[test]
    fn test_empty_group_is_transparent() {
        let groups = SidebarLinkGroups::from(vec![
            SidebarLinkGroup::new("A", vec![link("/1", "One")]),
            SidebarLinkGroup::new("B", vec![]),
            SidebarLinkGroup::new("C", vec![link("/2", "Two")]),
        ]);

        assert_eq!(
            resolve_navigation(Some(&groups), "/1").next,
            Some(link("/2", "Two"))
        );
        assert_eq!(
            resolve_navigation(Some(&groups), "/2").prev,
            Some(link("/1", "One"))
        );
    }

    #[test]
    fn test_leading_empty_groups_keep_first_link_first() {
        let groups = SidebarLinkGroups::from(vec![
            SidebarLinkGroup::new("Empty", vec![]),
            SidebarLinkGroup::new("A", vec![link("/1", "One"), link("/2", "Two")]),
        ]);

        let neighbors = resolve_navigation(Some(&groups), "/1");

        assert_eq!(neighbors.prev, None);
        assert_eq!(neighbors.next, Some(link("/2", "Two")));
    }

    #[test]
    fn test_duplicate_url_resolves_first_occurrence() {
        let groups = SidebarLinkGroups::from(vec![
            SidebarLinkGroup::new("A", vec![link("/x", "X1"), link("/a", "A")]),
            SidebarLinkGroup::new("B", vec![link("/b", "B"), link("/a", "A again")]),
        ]);

        let neighbors = resolve_navigation(Some(&groups), "/a");

        assert_eq!(neighbors.prev, Some(link("/x", "X1")));
        assert_eq!(neighbors.next, Some(link("/b", "B")));
    }

    #[test]
    fn test_adjacent_duplicate_becomes_next() {
        let groups = SidebarLinkGroups::from(vec![SidebarLinkGroup::new(
            "A",
            vec![link("/a", "First"), link("/a", "Second")],
        )]);

        let neighbors = resolve_navigation(Some(&groups), "/a");

        assert_eq!(neighbors.prev, None);
        assert_eq!(neighbors.next, Some(link("/a", "Second")));
    }

    #[test]
    fn test_url_match_is_exact() {
        let groups = guide_and_ref();

        assert!(resolve_navigation(Some(&groups), "/a/").is_empty());
        assert!(resolve_navigation(Some(&groups), "a").is_empty());
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let groups = guide_and_ref();
        let before = groups.clone();

        let first = resolve_navigation(Some(&groups), "/b");
        let second = resolve_navigation(Some(&groups), "/b");

        assert_eq!(first, second);
        assert_eq!(groups, before);
    }
}
