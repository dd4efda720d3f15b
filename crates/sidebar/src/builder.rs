// crates/sidebar/src/builder.rs
//! Groups a flat run of h2/h3 headings into a two-level navigation tree.

use docnav_types::{HeadingLevel, NavEntry, NavTree};
use log::{debug, trace};

use crate::heading::HeadingNode;
use crate::options::DEFAULT_ID_PREFIX;

/// Returns the heading's id, synthesizing `header_<index>` and writing it back if it has none.
///
/// `index` is the heading's position among all matched headings of the page.
/// A non-empty existing id is returned untouched and nothing is written.
pub fn assign_identifier<H: HeadingNode + ?Sized>(heading: &mut H, index: usize) -> String {
    assign_identifier_with_prefix(heading, index, DEFAULT_ID_PREFIX)
}

/// [`assign_identifier`] with a custom prefix for synthesized ids.
pub fn assign_identifier_with_prefix<H: HeadingNode + ?Sized>(
    heading: &mut H,
    index: usize,
    prefix: &str,
) -> String {
    if let Some(id) = heading.id().filter(|id| !id.is_empty()) {
        return id.to_string();
    }
    // Positions are shared across h2 and h3, so an authored id like `header_3`
    // can collide with a synthesized one. Left as is.
    let id = format!("{prefix}{index}");
    heading.set_id(id.clone());
    id
}

/// Builds the childless entry for one heading, assigning its id first.
pub fn build_entry<H: HeadingNode + ?Sized>(heading: &mut H, index: usize) -> NavEntry {
    build_entry_with_prefix(heading, index, DEFAULT_ID_PREFIX)
}

pub fn build_entry_with_prefix<H: HeadingNode + ?Sized>(
    heading: &mut H,
    index: usize,
    prefix: &str,
) -> NavEntry {
    let id = assign_identifier_with_prefix(heading, index, prefix);
    let entry = NavEntry::link(&id, heading.text());
    trace!("heading {index} ({}) -> {}", heading.level(), entry.href);
    entry
}

/// Builds the navigation tree from headings in document order.
///
/// Each step takes one heading as a top-level entry, then every directly
/// following h3 as its children, stopping at the next h2. The level of the
/// top-level heading itself is not checked: an h3 with no h2 before it
/// becomes a top-level entry.
pub fn build_tree<H: HeadingNode>(headings: &mut [H]) -> NavTree {
    build_tree_with_prefix(headings, DEFAULT_ID_PREFIX)
}

pub fn build_tree_with_prefix<H: HeadingNode>(headings: &mut [H], prefix: &str) -> NavTree {
    let mut tree = NavTree::new();
    let mut i = 0;

    while i < headings.len() {
        if headings[i].level() == HeadingLevel::H3 {
            debug!("heading {i} is an h3 with no h2 before it; listing it at the top level");
        }
        let mut entry = build_entry_with_prefix(&mut headings[i], i, prefix);
        i += 1;

        while i < headings.len() && headings[i].level() == HeadingLevel::H3 {
            entry
                .children
                .push(build_entry_with_prefix(&mut headings[i], i, prefix));
            i += 1;
        }
        tree.push(entry);
    }

    debug!(
        "built navigation tree: {} top-level entries from {} headings",
        tree.len(),
        headings.len()
    );
    tree
}
