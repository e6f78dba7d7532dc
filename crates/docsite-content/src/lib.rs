//! Content loading for docsite.
//!
//! Reads a content directory into pages ready for export:
//! - every `*.md` file becomes a page, with optional YAML frontmatter
//! - named sidebars come from a YAML sidebar file (`sidebars.yaml`)
//! - pages are built through a [`PageTypeRegistry`](docsite_pages::PageTypeRegistry),
//!   so docs pages resolve their previous/next links at load time
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use docsite_content::ContentSite;
//! use docsite_pages::PageTypeRegistry;
//!
//! let site = ContentSite::load(
//!     Path::new("content"),
//!     Path::new("content/sidebars.yaml"),
//!     &PageTypeRegistry::with_defaults(),
//! )?;
//! for page in site.pages() {
//!     println!("{} -> {:?}", page.url(), page.template_candidates());
//! }
//! # Ok::<(), docsite_content::ContentError>(())
//! ```

mod error;
mod frontmatter;
mod scanner;
mod sidebars;
mod site;

pub use error::ContentError;
pub use frontmatter::{Frontmatter, SidebarRef};
pub use sidebars::Sidebars;
pub use site::{ContentSite, DanglingLink, SidebarOrigin};
