//! Registry of page types.
//!
//! Maps a page type name (the `type` field of a page) to the constructor of
//! the page kind handling it. Registration is explicit: callers build the
//! registry they need and pass it to content loading.

use std::collections::HashMap;

use crate::page::{DocsPage, GenericPage, StaticPage, StaticPageData};
use crate::template::DOCS_PAGE_TYPE;

/// Constructor turning page data into a page.
pub type PageConstructor = fn(StaticPageData) -> Box<dyn StaticPage>;

/// Registry mapping page type names to [`PageConstructor`]s.
///
/// Types without a registered constructor are built as [`GenericPage`].
#[derive(Clone, Debug, Default)]
pub struct PageTypeRegistry {
    constructors: HashMap<String, PageConstructor>,
}

impl PageTypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in page types (`docs`).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new().register(DOCS_PAGE_TYPE, |data| Box::new(DocsPage::new(data)))
    }

    /// Register a constructor for a page type, replacing any previous one.
    #[must_use]
    pub fn register(mut self, page_type: impl Into<String>, constructor: PageConstructor) -> Self {
        self.constructors.insert(page_type.into(), constructor);
        self
    }

    /// Check if a page type has a registered constructor.
    #[must_use]
    pub fn contains(&self, page_type: &str) -> bool {
        self.constructors.contains_key(page_type)
    }

    /// Registered page type names, sorted.
    #[must_use]
    pub fn page_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Build a page from its data.
    ///
    /// Falls back to [`GenericPage`] for unregistered types.
    #[must_use]
    pub fn build(&self, data: StaticPageData) -> Box<dyn StaticPage> {
        if let Some(constructor) = self.constructors.get(&data.page_type) {
            return constructor(data);
        }

        tracing::warn!(
            url = %data.url,
            page_type = %data.page_type,
            "Unknown page type, rendering as generic page"
        );
        Box::new(GenericPage::new(data))
    }
}
