// crates/dom/src/serialize.rs
//! HTML5 serialization of the owned tree.

use std::fmt::Write;

use crate::document::Document;
use crate::node::{Element, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// Text inside these is emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(name) = &doc.doctype {
        let _ = write!(out, "<!DOCTYPE {name}>");
    }
    for node in &doc.children {
        write_node(&mut out, node, None);
    }
    out
}

pub fn serialize_element(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

pub fn serialize_fragment(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, None);
    }
    out
}

fn write_node(out: &mut String, node: &Node, parent_tag: Option<&str>) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(text) => {
            if parent_tag.is_some_and(|t| RAW_TEXT_ELEMENTS.contains(&t)) {
                out.push_str(text);
            } else {
                escape_text_into(out, text);
            }
        }
        Node::Comment(text) => {
            let _ = write!(out, "<!--{text}-->");
        }
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attr_into(out, value);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }

    // The parser drops one newline right after these start tags.
    if matches!(el.tag.as_str(), "pre" | "textarea" | "listing")
        && matches!(el.children.first(), Some(Node::Text(t)) if t.starts_with('\n'))
    {
        out.push('\n');
    }

    for child in &el.children {
        write_node(out, child, Some(el.tag.as_str()));
    }
    let _ = write!(out, "</{}>", el.tag);
}

// Text content: `&`, `<`, `>` and non-breaking spaces.
fn escape_text_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

// Attribute values: `&`, `"` and non-breaking spaces.
fn escape_attr_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let el = Element::new("p")
            .with_text("a")
            .with_child(Element::new("br"))
            .with_text("b");
        assert_eq!(serialize_element(&el), "<p>a<br>b</p>");
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let el = Element::new("a")
            .with_attr("title", "say \"hi\" & <go>")
            .with_text("1 < 2 && 3 > 2");
        assert_eq!(
            serialize_element(&el),
            "<a title=\"say &quot;hi&quot; &amp; <go>\">1 &lt; 2 &amp;&amp; 3 &gt; 2</a>"
        );
    }

    #[test]
    fn test_script_text_is_not_escaped() {
        let el = Element::new("script").with_text("if (a < b && c) {}");
        assert_eq!(serialize_element(&el), "<script>if (a < b && c) {}</script>");
    }

    #[test]
    fn test_comments_round_trip() {
        let nodes = vec![Node::Comment(" note ".into()), Node::Text("x".into())];
        assert_eq!(serialize_fragment(&nodes), "<!-- note -->x");
    }
}
