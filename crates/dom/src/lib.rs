//! A small owned HTML tree.
//!
//! Pages are parsed with html5ever into plain `Element`/`Node` values, queried
//! and mutated in place, then serialized back to HTML5. There is no shared or
//! reference-counted state: the tree is an ordinary value that can be passed to
//! pure functions and handed back.

pub mod document;
pub mod node;
mod parser;
pub mod serialize;

pub use document::Document;
pub use node::{Element, Node, NodePath};
pub use parser::{parse_document, parse_fragment};
pub use serialize::{serialize_document, serialize_element, serialize_fragment};
