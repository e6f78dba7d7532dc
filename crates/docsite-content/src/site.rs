//! Loaded documentation content.

use std::path::Path;

use std::fmt;

use docsite_nav::{DuplicateUrl, Link, SidebarLinkGroups};
use docsite_pages::{DOCS_PAGE_TYPE, PageTypeRegistry, StaticPage, StaticPageData};

use crate::ContentError;
use crate::frontmatter::{Frontmatter, SidebarRef, extract_title, split_frontmatter};
use crate::scanner::{self, SourceFile};
use crate::sidebars::{Sidebars, warn_duplicate};

/// Where a sidebar was declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarOrigin {
    /// Named sidebar from the sidebar file.
    Named(String),
    /// Sidebar written inline in a page's frontmatter.
    Inline {
        /// Name of the declaring page.
        page: String,
    },
}

impl fmt::Display for SidebarOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "sidebar '{name}'"),
            Self::Inline { page } => write!(f, "inline sidebar of page '{page}'"),
        }
    }
}

/// Sidebar link whose URL matches no page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingLink {
    /// Sidebar holding the link.
    pub sidebar: SidebarOrigin,
    /// Title of the group holding the link.
    pub group_title: String,
    /// The link itself.
    pub link: Link,
}

/// Every page of a content directory together with its sidebars.
#[derive(Debug, Default)]
pub struct ContentSite {
    pages: Vec<Box<dyn StaticPage>>,
    sidebars: Sidebars,
    /// URLs of pages declaring an inline sidebar, sorted.
    inline_sidebar_urls: Vec<String>,
}

impl ContentSite {
    /// Load pages from `source_dir` and sidebars from `sidebars_path`.
    ///
    /// Each page is built through `registry`, so docs pages resolve their
    /// neighbors here. Pages are sorted by URL.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if a file cannot be read or parsed, a page
    /// names an unknown sidebar, or two pages share a URL.
    pub fn load(
        source_dir: &Path,
        sidebars_path: &Path,
        registry: &PageTypeRegistry,
    ) -> Result<Self, ContentError> {
        let sidebars = Sidebars::load(sidebars_path)?;
        let files = scanner::scan(source_dir)?;

        let mut pages = Vec::with_capacity(files.len());
        let mut inline_sidebar_urls = Vec::new();
        for file in &files {
            let (data, inline_sidebar) = read_page(file, &sidebars)?;
            tracing::debug!(url = %data.url, name = %data.name, page_type = %data.page_type, "Loaded page");
            if inline_sidebar {
                inline_sidebar_urls.push(data.url.clone());
            }
            pages.push(registry.build(data));
        }

        let mut site = Self::new(pages, sidebars)?;
        inline_sidebar_urls.sort();
        site.inline_sidebar_urls = inline_sidebar_urls;
        tracing::info!(
            pages = site.pages.len(),
            sidebars = site.sidebars.len(),
            source_dir = %source_dir.display(),
            "Loaded content"
        );
        Ok(site)
    }

    /// Assemble a site from already built pages.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::DuplicatePageUrl`] if two pages share a URL.
    pub fn new(mut pages: Vec<Box<dyn StaticPage>>, sidebars: Sidebars) -> Result<Self, ContentError> {
        pages.sort_by(|a, b| a.url().cmp(b.url()));
        if let Some(pair) = pages.windows(2).find(|pair| pair[0].url() == pair[1].url()) {
            return Err(ContentError::DuplicatePageUrl {
                url: pair[0].url().to_owned(),
                first: pair[0].page_name().to_owned(),
                second: pair[1].page_name().to_owned(),
            });
        }
        Ok(Self {
            pages,
            sidebars,
            inline_sidebar_urls: Vec::new(),
        })
    }

    /// Pages sorted by URL.
    #[must_use]
    pub fn pages(&self) -> &[Box<dyn StaticPage>] {
        &self.pages
    }

    /// Find a page by URL.
    #[must_use]
    pub fn page(&self, url: &str) -> Option<&dyn StaticPage> {
        self.pages
            .binary_search_by(|page| page.url().cmp(url))
            .ok()
            .map(|index| self.pages[index].as_ref())
    }

    /// Named sidebars.
    #[must_use]
    pub fn sidebars(&self) -> &Sidebars {
        &self.sidebars
    }

    /// Every sidebar in use: named sidebars in name order, then inline
    /// sidebars in page URL order.
    #[must_use]
    pub fn all_sidebars(&self) -> Vec<(SidebarOrigin, &SidebarLinkGroups)> {
        let named = self
            .sidebars
            .iter()
            .map(|(name, groups)| (SidebarOrigin::Named(name.to_owned()), groups));
        let inline = self.inline_sidebar_urls.iter().filter_map(|url| {
            let page = self.page(url)?;
            let groups = page.sidebar()?;
            let origin = SidebarOrigin::Inline {
                page: page.page_name().to_owned(),
            };
            Some((origin, groups))
        });
        named.chain(inline).collect()
    }

    /// URLs listed more than once in any sidebar.
    #[must_use]
    pub fn duplicate_urls(&self) -> Vec<(SidebarOrigin, DuplicateUrl)> {
        self.all_sidebars()
            .into_iter()
            .flat_map(|(origin, groups)| {
                groups
                    .duplicate_urls()
                    .into_iter()
                    .map(move |duplicate| (origin.clone(), duplicate))
            })
            .collect()
    }

    /// Links of any sidebar that point at no page.
    ///
    /// Absolute links (`scheme://`) are not checked.
    #[must_use]
    pub fn dangling_links(&self) -> Vec<DanglingLink> {
        let mut dangling = Vec::new();
        for (origin, groups) in self.all_sidebars() {
            for group in groups.groups() {
                for link in &group.links {
                    if link.url.contains("://") || self.page(&link.url).is_some() {
                        continue;
                    }
                    dangling.push(DanglingLink {
                        sidebar: origin.clone(),
                        group_title: group.title.clone(),
                        link: link.clone(),
                    });
                }
            }
        }
        dangling
    }
}

/// Read a markdown file into page data.
///
/// The flag is true when the page declares its sidebar inline.
fn read_page(
    file: &SourceFile,
    sidebars: &Sidebars,
) -> Result<(StaticPageData, bool), ContentError> {
    let content = std::fs::read_to_string(&file.path).map_err(|e| ContentError::io(&file.path, e))?;
    let (frontmatter, body) = split_frontmatter(&content);
    let frontmatter = Frontmatter::from_yaml(frontmatter.unwrap_or_default()).map_err(|source| {
        ContentError::Yaml {
            path: file.path.clone(),
            source,
        }
    })?;

    let url = frontmatter
        .url
        .as_deref()
        .map_or_else(|| default_url(&file.name), normalize_url);
    let page_type = frontmatter
        .page_type
        .unwrap_or_else(|| DOCS_PAGE_TYPE.to_owned());
    let title = frontmatter
        .title
        .or_else(|| extract_title(body))
        .unwrap_or_else(|| file.name.clone());

    let mut data = StaticPageData::new(url, file.name.clone(), page_type)
        .with_title(title)
        .with_body(body)
        .with_vars(frontmatter.vars);

    let mut inline_sidebar = false;
    match frontmatter.sidebar {
        Some(SidebarRef::Named(name)) => {
            let groups = sidebars
                .get(&name)
                .ok_or_else(|| ContentError::UnknownSidebar {
                    page: file.name.clone(),
                    sidebar: name.clone(),
                })?;
            data = data.with_sidebar(groups.clone());
        }
        Some(SidebarRef::Inline(groups)) => {
            for duplicate in groups.duplicate_urls() {
                warn_duplicate(&file.name, &duplicate);
            }
            data = data.with_sidebar(groups);
            inline_sidebar = true;
        }
        None => {}
    }

    Ok((data, inline_sidebar))
}

/// URL of a page without a `url` override.
///
/// `index` maps to `/` and `dir/index` to `/dir`.
fn default_url(name: &str) -> String {
    let path = if name == "index" {
        ""
    } else {
        name.strip_suffix("/index").unwrap_or(name)
    };
    format!("/{path}")
}

/// Ensure a URL override has a leading slash and no trailing one.
fn normalize_url(url: &str) -> String {
    let trimmed = url.trim().trim_matches('/');
    format!("/{trimmed}")
}

#[cfg(test)]
mod tests {
    use docsite_pages::GenericPage;
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
      - { url: https://example.com, title: External }
";

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn load(root: &Path) -> Result<ContentSite, ContentError> {
        ContentSite::load(
            root,
            &root.join("sidebars.yaml"),
            &PageTypeRegistry::with_defaults(),
        )
    }

    #[test]
    fn test_default_url() {
        assert_eq!(default_url("index"), "/");
        assert_eq!(default_url("docs/index"), "/docs");
        assert_eq!(default_url("docs/install"), "/docs/install");
        assert_eq!(default_url("reindex"), "/reindex");
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("about"), "/about");
        assert_eq!(normalize_url("/about/"), "/about");
        assert_eq!(normalize_url("/"), "/");
    }

    #[test]
    fn test_load_pages_with_navigation() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sidebars.yaml", SIDEBARS);
        write(dir.path(), "index.md", "---\ntype: landing\n---\n# Welcome\n");
        write(dir.path(), "docs/install.md", "---\nsidebar: docs\n---\n# Installing\n");
        write(dir.path(), "docs/usage.md", "---\nsidebar: docs\ntitle: Use it\n---\nBody\n");
        write(dir.path(), "docs/api.md", "---\nsidebar: docs\n---\nNo heading\n");

        let site = load(dir.path()).unwrap();

        let urls: Vec<&str> = site.pages().iter().map(|p| p.url()).collect();
        assert_eq!(urls, vec!["/", "/docs/api", "/docs/install", "/docs/usage"]);

        let usage = site.page("/docs/usage").unwrap();
        assert_eq!(usage.title(), "Use it");
        assert_eq!(usage.prev_page(), Some(&Link::new("/docs/install", "Install")));
        assert_eq!(usage.next_page(), Some(&Link::new("/docs/api", "API")));
        assert_eq!(usage.template_candidates(), vec!["docs", "docs-docs/usage"]);

        let install = site.page("/docs/install").unwrap();
        assert_eq!(install.title(), "Installing");
        assert_eq!(install.prev_page(), None);

        let api = site.page("/docs/api").unwrap();
        assert_eq!(api.title(), "docs/api");
        assert_eq!(api.next_page(), Some(&Link::new("https://example.com", "External")));

        let index = site.page("/").unwrap();
        assert_eq!(index.page_type(), "landing");
        assert_eq!(index.template_candidates(), vec!["landing", "landing-index"]);
        assert!(index.sidebar().is_none());
    }

    #[test]
    fn test_load_inline_sidebar_and_vars() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "a.md",
            "---\nvars:\n  badge: beta\nsidebar:\n  - title: G\n    links:\n      - { url: /a, title: A }\n      - { url: /b, title: B }\n---\n",
        );
        write(dir.path(), "b.md", "# B\n");

        let site = load(dir.path()).unwrap();

        let a = site.page("/a").unwrap();
        assert_eq!(a.next_page(), Some(&Link::new("/b", "B")));
        assert_eq!(a.data().vars.get("badge"), Some(&serde_json::json!("beta")));
        assert!(site.sidebars().is_empty());
    }

    #[test]
    fn test_load_url_override() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "guide/start.md", "---\nurl: getting-started\n---\n");

        let site = load(dir.path()).unwrap();

        let page = site.page("/getting-started").unwrap();
        assert_eq!(page.page_name(), "guide/start");
    }

    #[test]
    fn test_load_unknown_sidebar() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "---\nsidebar: nope\n---\n");

        let err = load(dir.path()).unwrap_err();

        assert!(
            matches!(&err, ContentError::UnknownSidebar { page, sidebar } if page == "a" && sidebar == "nope")
        );
    }

    #[test]
    fn test_load_duplicate_page_url() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/index.md", "");
        write(dir.path(), "docs.md", "");

        let err = load(dir.path()).unwrap_err();

        assert!(matches!(&err, ContentError::DuplicatePageUrl { url, .. } if url == "/docs"));
    }

    #[test]
    fn test_load_malformed_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "---\ntitle: [oops\n---\n");

        let err = load(dir.path()).unwrap_err();

        assert!(matches!(err, ContentError::Yaml { .. }));
    }

    #[test]
    fn test_dangling_links() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sidebars.yaml", SIDEBARS);
        write(dir.path(), "docs/install.md", "");
        write(dir.path(), "docs/api.md", "");

        let site = load(dir.path()).unwrap();

        assert_eq!(
            site.dangling_links(),
            vec![DanglingLink {
                sidebar: SidebarOrigin::Named("docs".to_owned()),
                group_title: "Guide".to_owned(),
                link: Link::new("/docs/usage", "Usage"),
            }]
        );
    }

    #[test]
    fn test_inline_sidebars_are_checked() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sidebars.yaml", SIDEBARS);
        write(dir.path(), "docs/install.md", "---\nsidebar: docs\n---\n");
        write(
            dir.path(),
            "a.md",
            "---\nsidebar:\n  - title: G\n    links:\n      - { url: /a, title: A }\n      - { url: /missing, title: Missing }\n      - { url: /a, title: A again }\n---\n",
        );

        let site = load(dir.path()).unwrap();

        let origins: Vec<SidebarOrigin> = site
            .all_sidebars()
            .into_iter()
            .map(|(origin, _)| origin)
            .collect();
        let inline = SidebarOrigin::Inline {
            page: "a".to_owned(),
        };
        assert_eq!(
            origins,
            vec![SidebarOrigin::Named("docs".to_owned()), inline.clone()]
        );

        let duplicates = site.duplicate_urls();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].0, inline);
        assert_eq!(duplicates[0].1.url, "/a");

        let dangling: Vec<(SidebarOrigin, String)> = site
            .dangling_links()
            .into_iter()
            .map(|d| (d.sidebar, d.link.url))
            .collect();
        assert_eq!(
            dangling,
            vec![
                (SidebarOrigin::Named("docs".to_owned()), "/docs/usage".to_owned()),
                (SidebarOrigin::Named("docs".to_owned()), "/docs/api".to_owned()),
                (inline, "/missing".to_owned()),
            ]
        );
    }

    #[test]
    fn test_sidebar_origin_display() {
        assert_eq!(
            SidebarOrigin::Named("docs".to_owned()).to_string(),
            "sidebar 'docs'"
        );
        assert_eq!(
            SidebarOrigin::Inline {
                page: "guide/a".to_owned()
            }
            .to_string(),
            "inline sidebar of page 'guide/a'"
        );
    }

    #[test]
    fn test_new_sorts_pages() {
        let pages: Vec<Box<dyn StaticPage>> = vec![
            Box::new(GenericPage::new(StaticPageData::new("/b", "b", "page"))),
            Box::new(GenericPage::new(StaticPageData::new("/a", "a", "page"))),
        ];

        let site = ContentSite::new(pages, Sidebars::default()).unwrap();

        assert_eq!(site.pages()[0].url(), "/a");
        assert_eq!(site.page("/b").map(|p| p.page_name()), Some("b"));
        assert!(site.page("/c").is_none());
    }
}
