//! Template candidate names.

/// Page type name of documentation pages.
pub const DOCS_PAGE_TYPE: &str = "docs";

/// Ordered template names to try when rendering a page.
///
/// Returns the generic page type template first, then the page-specific one
/// (`"<type>-<name>"`). The template lookup uses the first name that exists,
/// so the generic template is always a valid fallback. The list is never empty.
#[must_use]
pub fn template_candidates(page_type: &str, page_name: &str) -> Vec<String> {
    vec![page_type.to_owned(), format!("{page_type}-{page_name}")]
}
