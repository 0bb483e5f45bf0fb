//! HTML rendering for [`Node`] trees.

use std::borrow::Cow;

use super::{Node, NodeKind};

impl Node {
    /// Renders this node and its children to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Appends the HTML for this node to `out`.
    pub fn write_html(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Document => self.write_children(out),
            NodeKind::Heading { level } => {
                out.push_str(&format!("<h{level}>"));
                self.write_children(out);
                out.push_str(&format!("</h{level}>\n"));
            }
            NodeKind::Bold => {
                out.push_str("<strong>");
                self.write_children(out);
                out.push_str("</strong>");
            }
            NodeKind::List => {
                out.push_str("<ul>\n");
                self.write_children(out);
                out.push_str("</ul>\n");
            }
            NodeKind::ListItem => {
                out.push_str("<li>");
                self.write_children(out);
                out.push_str("</li>\n");
            }
            // Text is a leaf; only its content is rendered.
            NodeKind::Text { content } => out.push_str(&escape_html(content)),
            NodeKind::Custom(custom) => {
                let mut children = String::new();
                self.write_children(&mut children);
                out.push_str(&custom.render(&children));
            }
        }
    }

    fn write_children(&self, out: &mut String) {
        for child in &self.children {
            child.write_html(out);
        }
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in HTML text and attributes.
///
/// Borrows the input unchanged when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
