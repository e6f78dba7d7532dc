//! Static page contract for docsite.
//!
//! This crate provides:
//! - [`StaticPage`]: what an exporter needs from a page to enumerate and render it
//! - [`DocsPage`]: documentation page with previous/next navigation
//! - [`GenericPage`]: fallback page kind without navigation
//! - [`template_candidates`]: ordered template names to try for a page
//! - [`PageTypeRegistry`]: explicit mapping from page type names to page kinds
//!
//! # Quick Start
//!
//! ```
//! use docsite_pages::{PageTypeRegistry, StaticPageData};
//!
//! let registry = PageTypeRegistry::with_defaults();
//! let page = registry.build(StaticPageData::new("/docs/install", "install", "docs"));
//!
//! assert_eq!(page.template_candidates(), vec!["docs", "docs-install"]);
//! ```

mod page;
mod registry;
mod template;

pub use page::{DocsPage, GenericPage, StaticPage, StaticPageData};
pub use registry::{PageConstructor, PageTypeRegistry};
pub use template::{DOCS_PAGE_TYPE, template_candidates};

// Re-export the sidebar model for convenience
pub use docsite_nav::{Link, PageNeighbors, SidebarLinkGroup, SidebarLinkGroups};
