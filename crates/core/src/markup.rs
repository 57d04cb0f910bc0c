//! Splits rich text into plain runs and math runs.
//!
//! Supported delimiters: `$$…$$` and `\[…\]` for display math, `$…$` and
//! `\(…\)` for inline math. `\$` is a literal dollar sign. An opening
//! delimiter without a matching close is kept as plain text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Text(String),
    InlineMath(String),
    DisplayMath(String),
}

const DELIMITERS: [(&str, &str, bool); 4] = [
    ("$$", "$$", true),
    ("\\[", "\\]", true),
    ("\\(", "\\)", false),
    ("$", "$", false),
];

#[must_use]
pub fn parse_math_markup(input: &str) -> Vec<MarkupNode> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut rest = input;

    'scan: while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("\\$") {
            text.push('$');
            rest = after;
            continue;
        }

        for (open, close, display) in DELIMITERS {
            let Some(body) = rest.strip_prefix(open) else {
                continue;
            };
            if let Some(end) = find_closing(body, close) {
                if !text.is_empty() {
                    nodes.push(MarkupNode::Text(std::mem::take(&mut text)));
                }
                let math = body[..end].to_string();
                nodes.push(if display {
                    MarkupNode::DisplayMath(math)
                } else {
                    MarkupNode::InlineMath(math)
                });
                rest = &body[end + close.len()..];
                continue 'scan;
            }
            // Unterminated: fall through and treat the first char as text.
            break;
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            text.push(ch);
        }
        rest = chars.as_str();
    }

    if !text.is_empty() {
        nodes.push(MarkupNode::Text(text));
    }
    nodes
}

/// Byte offset of `close` in `body`, skipping backslash-escaped dollars.
fn find_closing(body: &str, close: &str) -> Option<usize> {
    if !close.starts_with('$') {
        return body.find(close);
    }
    let bytes = body.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'\\' {
            idx += 2;
            continue;
        }
        if bytes[idx..].starts_with(close.as_bytes()) {
            return Some(idx);
        }
        idx += 1;
    }
    None
}

#[must_use]
pub fn contains_math(input: &str) -> bool {
    parse_math_markup(input)
        .iter()
        .any(|node| !matches!(node, MarkupNode::Text(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MarkupNode {
        MarkupNode::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_node() {
        assert_eq!(parse_math_markup("no math here"), vec![text("no math here")]);
        assert!(parse_math_markup("").is_empty());
    }

    #[test]
    fn inline_and_display_math_are_split_out() {
        let nodes = parse_math_markup("Area: $A = l \\times w$ and $$C = 2 \\pi r$$.");
        assert_eq!(
            nodes,
            vec![
                text("Area: "),
                MarkupNode::InlineMath("A = l \\times w".into()),
                text(" and "),
                MarkupNode::DisplayMath("C = 2 \\pi r".into()),
                text("."),
            ]
        );
    }

    #[test]
    fn bracket_delimiters() {
        let nodes = parse_math_markup("\\(x\\) then \\[y\\]");
        assert_eq!(
            nodes,
            vec![
                MarkupNode::InlineMath("x".into()),
                text(" then "),
                MarkupNode::DisplayMath("y".into()),
            ]
        );
    }

    #[test]
    fn unterminated_delimiter_stays_literal() {
        assert_eq!(parse_math_markup("cost $5"), vec![text("cost $5")]);
        assert_eq!(parse_math_markup("\\[open"), vec![text("\\[open")]);
    }

    #[test]
    fn escaped_dollar_is_literal() {
        assert_eq!(
            parse_math_markup("price \\$3 and $x$"),
            vec![text("price $3 and "), MarkupNode::InlineMath("x".into())]
        );
    }

    #[test]
    fn persian_text_around_math_is_preserved() {
        let nodes = parse_math_markup("حاصل $2 + 2$ کدام است؟");
        assert_eq!(
            nodes,
            vec![
                text("حاصل "),
                MarkupNode::InlineMath("2 + 2".into()),
                text(" کدام است؟"),
            ]
        );
        assert!(contains_math("حاصل $2 + 2$"));
        assert!(!contains_math("حاصل"));
    }
}
