//! HTML serialization for [`Document`] subtrees.

use super::{Document, NodeId};

impl Document {
    /// Serializes the whole document, starting at the `html` element.
    pub fn to_html(&self) -> String {
        self.outer_html(self.root())
    }

    /// Serializes `node` and its descendants.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        if let Some(text) = self.text(node) {
            out.push_str(&escape_text(text));
            return;
        }
        let Some(tag) = self.tag_name(node) else {
            return;
        };
        out.push('<');
        out.push_str(tag);
        for (name, value) in self.attributes(node) {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
        out.push('>');
        // Parsers drop one newline right after these start tags.
        if drops_leading_newline(tag)
            && self
                .children(node)
                .first()
                .and_then(|&first| self.text(first))
                .is_some_and(|text| text.starts_with('\n'))
        {
            out.push('\n');
        }
        for &child in self.children(node) {
            self.write_node(child, out);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn drops_leading_newline(tag: &str) -> bool {
    ["pre", "textarea", "listing"]
        .iter()
        .any(|name| tag.eq_ignore_ascii_case(name))
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escapes_markup_but_not_quotes() {
        assert_eq!(escape_text(r#"a < b && "c" > d"#), r#"a &lt; b &amp;&amp; "c" &gt; d"#);
    }

    #[test]
    fn only_preformatted_tags_drop_a_leading_newline() {
        assert!(drops_leading_newline("pre"));
        assert!(drops_leading_newline("TEXTAREA"));
        assert!(!drops_leading_newline("div"));
    }

    #[test]
    fn attribute_escapes_quotes() {
        assert_eq!(escape_attribute(r#"say "hi" & go"#), "say &quot;hi&quot; &amp; go");
    }
}
