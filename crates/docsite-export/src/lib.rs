//! Static HTML export for docsite.
//!
//! Renders pages with minijinja templates and writes one `index.html` per
//! page URL. Each page is rendered with the first of its
//! [template candidates](docsite_pages::StaticPage::template_candidates)
//! that exists in the [`TemplateSet`].
//!
//! # Template Context
//!
//! | Variable    | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | `site`      | `name`, `base_url`                                        |
//! | `navbar`    | `site_name`                                               |
//! | `page`      | `url`, `name`, `type`, `title`, `content` (HTML), `vars`  |
//! | `sidebar`   | list of groups (`title`, `links`), or none                |
//! | `prev_page` | previous link (`url`, `title`), or none                   |
//! | `next_page` | next link (`url`, `title`), or none                       |
//! | `template`  | name of the template being rendered                       |
//!
//! # Example
//!
//! ```
//! use docsite_export::{SiteInfo, StaticExporter, TemplateSet};
//! use docsite_pages::{PageTypeRegistry, StaticPageData};
//!
//! let mut templates = TemplateSet::new();
//! templates.add("docs", "<h1>{{ page.title }}</h1>{{ page.content }}")?;
//!
//! let exporter = StaticExporter::new(templates, SiteInfo::default());
//! let page = PageTypeRegistry::with_defaults()
//!     .build(StaticPageData::new("/intro", "intro", "docs").with_body("Hello"));
//!
//! let (template, html) = exporter.render_page(page.as_ref())?;
//! assert_eq!(template, "docs");
//! assert_eq!(html, "<h1>intro</h1><p>Hello</p>\n");
//! # Ok::<(), docsite_export::ExportError>(())
//! ```

mod error;
mod exporter;
mod markdown;
mod navbar;
mod templates;

pub use error::ExportError;
pub use exporter::{ExportReport, ExportedFile, SiteInfo, StaticExporter};
pub use markdown::render_markdown;
pub use navbar::Navbar;
pub use templates::TemplateSet;
