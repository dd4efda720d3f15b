use docnav_dom::Element;
use docnav_types::{NavEntry, NavTree};

/// Renders the tree as nested lists: one `<li><a>` per entry, with an inner
/// `<ul>` only for entries that have children.
pub fn render_nav_tree(tree: &NavTree) -> Element {
    render_list(tree.entries())
}

fn render_list(entries: &[NavEntry]) -> Element {
    entries
        .iter()
        .fold(Element::new("ul"), |ul, entry| ul.with_child(render_entry(entry)))
}

fn render_entry(entry: &NavEntry) -> Element {
    let link = Element::new("a")
        .with_attr("href", entry.href.as_str())
        .with_text(entry.label.as_str());
    let li = Element::new("li").with_child(link);
    if entry.has_children() {
        li.with_child(render_list(&entry.children))
    } else {
        li
    }
}
