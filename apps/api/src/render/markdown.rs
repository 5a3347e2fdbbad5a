//! Markdown rendering for the response panel. Default rendering rules only —
//! no extensions, no custom configuration.

use pulldown_cmark::{html, Options, Parser};

/// Renders response markdown to an HTML fragment.
pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
