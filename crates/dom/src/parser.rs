// crates/dom/src/parser.rs
//! HTML5 parsing via html5ever. Parsing never fails; malformed markup is
//! recovered the same way a browser would.

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document as html5_parse_document};
use log::trace;
use html5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::document::Document;
use crate::node::{Element, Node};

/// Parses a complete HTML page.
pub fn parse_document(html: &str) -> Document {
    let dom = html5_parse_document(RcDom::default(), ParseOpts::default()).one(html);

    let mut document = Document::default();
    for child in dom.document.children.borrow().iter() {
        if let NodeData::Doctype { name, .. } = &child.data {
            document.doctype = Some(name.to_string());
        } else if let Some(node) = convert(child) {
            document.children.push(node);
        }
    }
    trace!(
        "parsed {} bytes into {} top-level nodes",
        html.len(),
        document.children.len()
    );
    document
}

/// Parses a body fragment and returns the nodes the parser placed in `<body>`.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    parse_document(html)
        .into_body()
        .map(|body| body.children)
        .unwrap_or_default()
}

fn convert(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let mut element = Element::new(name.local.to_string());
            element.attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (qualified_name(attr), attr.value.to_string()))
                .collect();
            // A <template> keeps its parsed content in a separate fragment.
            let contents = template_contents.borrow();
            let source = contents.as_ref().unwrap_or(handle);
            element.children = source.children.borrow().iter().filter_map(convert).collect();
            Some(Node::Element(element))
        }
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Some(Node::Comment(contents.to_string())),
        _ => None,
    }
}

// Foreign attributes such as `xlink:href` and `xml:lang` are split into
// prefix and local name by the parser.
fn qualified_name(attr: &Attribute) -> String {
    match &attr.name.prefix {
        Some(prefix) => format!("{}:{}", prefix, attr.name.local),
        None => attr.name.local.to_string(),
    }
}
