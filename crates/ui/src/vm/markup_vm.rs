use std::collections::{HashMap, HashSet};

use mathbook_core::markup::{MarkupNode, parse_math_markup};

/// Turn lesson rich text into safe HTML.
///
/// Math runs become `span.math-inline` / `span.math-display` holding the
/// escaped source; the result is sanitized as a whole.
#[must_use]
pub fn render_math_html(input: &str) -> String {
    let mut html = String::with_capacity(input.len());
    for node in parse_math_markup(input) {
        match node {
            MarkupNode::Text(text) => html.push_str(&text),
            MarkupNode::InlineMath(source) => {
                html.push_str("<span class=\"math-inline\" dir=\"ltr\">");
                html.push_str(&ammonia::clean_text(&source));
                html.push_str("</span>");
            }
            MarkupNode::DisplayMath(source) => {
                html.push_str("<span class=\"math-display\" dir=\"ltr\">");
                html.push_str(&ammonia::clean_text(&source));
                html.push_str("</span>");
            }
        }
    }
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "sub", "sup",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("span", ["dir"].into_iter().collect());

    let mut classes: HashMap<&str, HashSet<&str>> = HashMap::new();
    classes.insert("span", ["math-inline", "math-display"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .allowed_classes(classes)
        .clean(html)
        .to_string()
}
