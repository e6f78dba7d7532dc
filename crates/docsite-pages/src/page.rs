//! Page render contract and built-in page kinds.

use std::collections::HashMap;

use docsite_nav::{Link, PageNeighbors, SidebarLinkGroups, resolve_navigation};
use serde::{Deserialize, Serialize};

use crate::template::{DOCS_PAGE_TYPE, template_candidates};

/// Raw page data produced by content loading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticPageData {
    /// URL path with leading slash (e.g., "/docs/install", "/" for root).
    pub url: String,
    /// Logical page name (source path without extension, e.g., "docs/install").
    pub name: String,
    /// Page type name (e.g., "docs").
    pub page_type: String,
    /// Display title.
    pub title: String,
    /// Markdown source of the page body.
    pub body: String,
    /// Table of contents this page belongs to.
    pub sidebar: Option<SidebarLinkGroups>,
    /// Custom variables for templating.
    pub vars: HashMap<String, serde_json::Value>,
}

impl StaticPageData {
    /// Create page data with the page name as title and an empty body.
    #[must_use]
    pub fn new(url: impl Into<String>, name: impl Into<String>, page_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            url: url.into(),
            title: name.clone(),
            name,
            page_type: page_type.into(),
            ..Default::default()
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the markdown body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Attach a sidebar.
    #[must_use]
    pub fn with_sidebar(mut self, sidebar: SidebarLinkGroups) -> Self {
        self.sidebar = Some(sidebar);
        self
    }

    /// Set custom template variables.
    #[must_use]
    pub fn with_vars(mut self, vars: HashMap<String, serde_json::Value>) -> Self {
        self.vars = vars;
        self
    }
}

/// A page that can be enumerated and rendered by an exporter.
///
/// Pages are immutable once built: everything derived from the page data
/// is computed by the constructor.
pub trait StaticPage: Send + Sync + std::fmt::Debug {
    /// Underlying page data.
    fn data(&self) -> &StaticPageData;

    /// Ordered template names to try, most generic first.
    fn template_candidates(&self) -> Vec<String>;

    /// URL path (unique key of the page).
    fn url(&self) -> &str {
        &self.data().url
    }

    /// Logical page name.
    fn page_name(&self) -> &str {
        &self.data().name
    }

    /// Page type name.
    fn page_type(&self) -> &str {
        &self.data().page_type
    }

    /// Display title.
    fn title(&self) -> &str {
        &self.data().title
    }

    /// Sidebar shown with this page, if any.
    fn sidebar(&self) -> Option<&SidebarLinkGroups> {
        self.data().sidebar.as_ref()
    }

    /// Previous page in reading order.
    fn prev_page(&self) -> Option<&Link> {
        None
    }

    /// Next page in reading order.
    fn next_page(&self) -> Option<&Link> {
        None
    }
}

/// Documentation page with previous/next navigation.
///
/// Neighbors are resolved once from the page's sidebar and URL when the
/// page is built.
#[derive(Clone, Debug)]
pub struct DocsPage {
    data: StaticPageData,
    neighbors: PageNeighbors,
}

impl DocsPage {
    /// Build a docs page, resolving its neighbors.
    #[must_use]
    pub fn new(data: StaticPageData) -> Self {
        let neighbors = resolve_navigation(data.sidebar.as_ref(), &data.url);
        if data.sidebar.is_some() && neighbors.is_empty() {
            tracing::debug!(url = %data.url, "Docs page has no neighbors in its sidebar");
        }
        Self { data, neighbors }
    }

    /// Resolved neighbors.
    #[must_use]
    pub fn neighbors(&self) -> &PageNeighbors {
        &self.neighbors
    }
}

impl StaticPage for DocsPage {
    fn data(&self) -> &StaticPageData {
        &self.data
    }

    fn template_candidates(&self) -> Vec<String> {
        template_candidates(DOCS_PAGE_TYPE, &self.data.name)
    }

    fn prev_page(&self) -> Option<&Link> {
        self.neighbors.prev.as_ref()
    }

    fn next_page(&self) -> Option<&Link> {
        self.neighbors.next.as_ref()
    }
}

/// Page of any other type. Has no navigation.
#[derive(Clone, Debug)]
pub struct GenericPage {
    data: StaticPageData,
}

impl GenericPage {
    /// Build a generic page.
    #[must_use]
    pub fn new(data: StaticPageData) -> Self {
        Self { data }
    }
}

impl StaticPage for GenericPage {
    fn data(&self) -> &StaticPageData {
        &self.data
    }

    fn template_candidates(&self) -> Vec<String> {
        template_candidates(&self.data.page_type, &self.data.name)
    }
}
