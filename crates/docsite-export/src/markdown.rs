//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Parser options for page bodies.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Render a markdown page body to HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, Parser::new_ext(markdown, parser_options()));
    output
}
