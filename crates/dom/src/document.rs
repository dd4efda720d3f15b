// crates/dom/src/document.rs

use crate::node::{
    Element, Node, NodePath, element_at_in, element_at_mut_in, find_in, heading_paths_in,
    insert_after_in,
};
use crate::serialize;

/// A parsed HTML page: the doctype plus the top-level nodes (normally a single `<html>`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub doctype: Option<String>,
    pub children: Vec<Node>,
}

impl Document {
    /// The `<html>` element, if present.
    pub fn html(&self) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find(|el| el.tag == "html")
    }

    /// The `<body>` element, if present.
    pub fn body(&self) -> Option<&Element> {
        self.html()?.child_elements().find(|el| el.tag == "body")
    }

    /// Consumes the document and returns its `<body>` element, if present.
    pub fn into_body(self) -> Option<Element> {
        let html = self.children.into_iter().find_map(|node| match node {
            Node::Element(el) if el.tag == "html" => Some(el),
            _ => None,
        })?;
        html.children.into_iter().find_map(|node| match node {
            Node::Element(el) if el.tag == "body" => Some(el),
            _ => None,
        })
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        find_in(&self.children, id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Paths to all `h2`/`h3` elements in document order, nested ones included.
    pub fn heading_paths(&self) -> Vec<NodePath> {
        let mut out = Vec::new();
        heading_paths_in(&self.children, &mut Vec::new(), &mut out);
        out
    }

    pub fn element_at(&self, path: &[usize]) -> Option<&Element> {
        element_at_in(&self.children, path)
    }

    pub fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        element_at_mut_in(&mut self.children, path)
    }

    /// Inserts `node` as the next sibling of the first element with the given id.
    pub fn insert_after_id(&mut self, id: &str, node: Node) -> Result<(), Node> {
        insert_after_in(&mut self.children, id, node)
    }

    pub fn to_html(&self) -> String {
        serialize::serialize_document(self)
    }
}
