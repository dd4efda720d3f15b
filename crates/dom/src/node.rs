// crates/dom/src/node.rs
//! The owned element tree that page processing reads and mutates.

use itertools::Itertools;

use crate::serialize;

/// Tags located by [`Element::heading_paths`].
const HEADING_TAGS: &[&str] = &["h2", "h3"];

/// Child indexes leading from a node list down to one element.
pub type NodePath = Vec<usize>;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An HTML element with ordered attributes and child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Lowercase local tag name.
    pub tag: String,
    /// Qualified attribute names (`xlink:href`, `xml:lang`) in source order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing the value in place if it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes, as written in the markup.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        push_text(&self.children, &mut text);
        text
    }

    /// Text as a reader sees it: whitespace runs collapsed to a single space, ends trimmed.
    pub fn visible_text(&self) -> String {
        self.text_content().split_whitespace().join(" ")
    }

    /// First element with the given id in document order, starting with `self`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        find_in(&self.children, id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Paths to all `h2`/`h3` descendants in document order, including
    /// headings nested inside other headings.
    pub fn heading_paths(&self) -> Vec<NodePath> {
        let mut out = Vec::new();
        heading_paths_in(&self.children, &mut Vec::new(), &mut out);
        out
    }

    /// The descendant at `path`, as returned by [`heading_paths`](Self::heading_paths).
    pub fn element_at(&self, path: &[usize]) -> Option<&Element> {
        element_at_in(&self.children, path)
    }

    pub fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        element_at_mut_in(&mut self.children, path)
    }

    /// Inserts `node` as the next sibling of the first descendant with the given id.
    /// Hands the node back if no such descendant exists.
    pub fn insert_after_id(&mut self, id: &str, node: Node) -> Result<(), Node> {
        insert_after_in(&mut self.children, id, node)
    }

    pub fn to_html(&self) -> String {
        serialize::serialize_element(self)
    }
}

fn push_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => push_text(&el.children, out),
            Node::Comment(_) => {}
        }
    }
}

pub(crate) fn find_in<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Element> {
    nodes
        .iter()
        .filter_map(Node::as_element)
        .find_map(|el| el.find_by_id(id))
}

// Pre-order: a heading comes before any heading nested inside it.
pub(crate) fn heading_paths_in(nodes: &[Node], path: &mut NodePath, out: &mut Vec<NodePath>) {
    for (i, node) in nodes.iter().enumerate() {
        if let Node::Element(el) = node {
            path.push(i);
            if HEADING_TAGS.iter().any(|t| el.tag.eq_ignore_ascii_case(t)) {
                out.push(path.clone());
            }
            heading_paths_in(&el.children, path, out);
            path.pop();
        }
    }
}

pub(crate) fn element_at_in<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Element> {
    let (&first, rest) = path.split_first()?;
    let el = nodes.get(first)?.as_element()?;
    if rest.is_empty() {
        Some(el)
    } else {
        element_at_in(&el.children, rest)
    }
}

pub(crate) fn element_at_mut_in<'a>(
    nodes: &'a mut [Node],
    path: &[usize],
) -> Option<&'a mut Element> {
    let (&first, rest) = path.split_first()?;
    let el = nodes.get_mut(first)?.as_element_mut()?;
    if rest.is_empty() {
        Some(el)
    } else {
        element_at_mut_in(&mut el.children, rest)
    }
}

pub(crate) fn insert_after_in(nodes: &mut Vec<Node>, id: &str, node: Node) -> Result<(), Node> {
    let mut node = node;
    for i in 0..nodes.len() {
        let is_target = matches!(&nodes[i], Node::Element(el) if el.id() == Some(id));
        if is_target {
            nodes.insert(i + 1, node);
            return Ok(());
        }
        if let Node::Element(el) = &mut nodes[i] {
            match el.insert_after_id(id, node) {
                Ok(()) => return Ok(()),
                Err(back) => node = back,
            }
        }
    }
    Err(node)
}
