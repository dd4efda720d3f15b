// crates/sidebar/src/install.rs
//! The document-facing side of the sidebar builder: the guard, the insertion,
//! and the page-ready entry point that ties them together.

use docnav_dom::{Document, Element};
use docnav_types::NavTree;
use log::{debug, info};

use crate::builder::build_tree_with_prefix;
use crate::error::SidebarError;
use crate::heading::heading_from_element;
use crate::options::SidebarOptions;
use crate::render::render_nav_tree;

/// True when the page opted in and has no sidebar yet.
pub fn should_build_sidebar(document: &Document, options: &SidebarOptions) -> bool {
    let opted_in = !options.require_opt_in || document.contains_id(&options.opt_in_id);
    let already_built = document.contains_id(&options.sidebar_id);
    debug!("sidebar guard: opted_in={opted_in}, already_built={already_built}");
    opted_in && !already_built
}

/// Builds the navigation tree from every h2/h3 of the page, nested ones
/// included, and writes synthesized ids back onto the heading elements.
pub fn build_page_tree(document: &mut Document, id_prefix: &str) -> NavTree {
    let paths = document.heading_paths();
    let mut headings: Vec<_> = paths
        .iter()
        .filter_map(|path| document.element_at(path))
        .map(heading_from_element)
        .collect();

    let tree = build_tree_with_prefix(&mut headings, id_prefix);

    for (path, heading) in paths.iter().zip(&headings) {
        let (Some(el), Some(id)) = (document.element_at_mut(path), heading.id.as_deref()) else {
            continue;
        };
        if el.id() != Some(id) {
            el.set_attr("id", id);
        }
    }
    tree
}

/// Builds the navigation tree from the page's h2/h3 headings and inserts the
/// sidebar right after the main content container.
///
/// Headings without an id get one written back so the links resolve. This does
/// not check for an existing sidebar; callers go through [`on_ready`] or
/// [`should_build_sidebar`] first. The document is left untouched if the main
/// container is missing.
pub fn install_sidebar(
    document: &mut Document,
    options: &SidebarOptions,
) -> Result<NavTree, SidebarError> {
    if !document.contains_id(&options.main_id) {
        return Err(SidebarError::MissingContainer(options.main_id.clone()));
    }

    let tree = build_page_tree(document, &options.id_prefix);

    let sidebar = Element::new("div")
        .with_attr("id", options.sidebar_id.as_str())
        .with_child(Element::new("h3").with_text(options.title.as_str()))
        .with_child(render_nav_tree(&tree));

    document
        .insert_after_id(&options.main_id, sidebar.into())
        .map_err(|_| SidebarError::MissingContainer(options.main_id.clone()))?;

    info!(
        "installed sidebar '#{}' after '#{}' ({} chapters, {} entries)",
        options.sidebar_id,
        options.main_id,
        tree.len(),
        tree.entry_count()
    );
    Ok(tree)
}

/// Page-ready handler: installs the sidebar once, if the page asks for one.
///
/// Returns the tree when a sidebar was installed and `None` when the guard
/// declined. Calling it again on the same document is a no-op.
pub fn on_ready(
    document: &mut Document,
    options: &SidebarOptions,
) -> Result<Option<NavTree>, SidebarError> {
    if !should_build_sidebar(document, options) {
        return Ok(None);
    }
    install_sidebar(document, options).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_dom::parse_document;

    const PAGE: &str = "<!DOCTYPE html><html><head></head><body>\
        <span id=\"with-index\"></span>\
        <div id=\"main\"><h2>Intro</h2><p>x</p><h3 id=\"custom\">Detail</h3><h2>Setup</h2></div>\
        <footer></footer>\
        </body></html>";

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_guard_requires_opt_in_marker() {
        init_logger();
        let opts = SidebarOptions::default();
        assert!(should_build_sidebar(&parse_document(PAGE), &opts));
        assert!(!should_build_sidebar(
            &parse_document("<div id=\"main\"><h2>A</h2></div>"),
            &opts
        ));
    }

    #[test]
    fn test_guard_declines_when_sidebar_present() {
        init_logger();
        let doc = parse_document(
            "<span id=\"with-index\"></span><div id=\"main\"></div><div id=\"sidebar\"></div>",
        );
        assert!(!should_build_sidebar(&doc, &SidebarOptions::default()));
    }

    #[test]
    fn test_guard_without_opt_in_requirement() {
        let opts = SidebarOptions {
            require_opt_in: false,
            ..Default::default()
        };
        assert!(should_build_sidebar(&parse_document("<div id=\"main\"></div>"), &opts));
        assert!(!should_build_sidebar(
            &parse_document("<div id=\"main\"></div><div id=\"sidebar\"></div>"),
            &opts
        ));
    }

    #[test]
    fn test_install_inserts_after_main() {
        init_logger();
        let mut doc = parse_document(PAGE);
        let tree = install_sidebar(&mut doc, &SidebarOptions::default()).unwrap();

        assert_eq!(tree.len(), 2);
        let body = doc.body().unwrap();
        let order: Vec<Option<&str>> = body.child_elements().map(|e| e.id()).collect();
        assert_eq!(order, vec![Some("with-index"), Some("main"), Some("sidebar"), None]);

        let sidebar = doc.find_by_id("sidebar").unwrap();
        assert_eq!(
            sidebar.to_html(),
            "<div id=\"sidebar\"><h3>Chapters</h3><ul>\
             <li><a href=\"#header_0\">Intro</a><ul><li><a href=\"#custom\">Detail</a></li></ul></li>\
             <li><a href=\"#header_2\">Setup</a></li>\
             </ul></div>"
        );
    }

    #[test]
    fn test_install_writes_ids_back() {
        let mut doc = parse_document(PAGE);
        install_sidebar(&mut doc, &SidebarOptions::default()).unwrap();

        assert_eq!(doc.find_by_id("header_0").unwrap().visible_text(), "Intro");
        assert_eq!(doc.find_by_id("header_2").unwrap().visible_text(), "Setup");
        assert!(doc.find_by_id("header_1").is_none());
    }

    #[test]
    fn test_nested_heading_gets_its_own_entry() {
        let mut doc = parse_document(
            "<span id=\"with-index\"></span>\
             <div id=\"main\"><h2>A<div><h3>Inner</h3></div></h2><h2 id=\"b\">B</h2></div>",
        );
        let tree = build_page_tree(&mut doc, "header_");

        assert_eq!(tree.entry_count(), 3);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.entries()[0].children[0].href, "#header_1");
        assert_eq!(tree.entries()[1].href, "#b");
        assert_eq!(doc.find_by_id("header_1").unwrap().tag, "h3");
        assert_eq!(doc.find_by_id("header_0").unwrap().tag, "h2");
    }

    #[test]
    fn test_install_without_main_leaves_document_untouched() {
        let mut doc = parse_document("<span id=\"with-index\"></span><h2>Lonely</h2>");
        let before = doc.clone();

        let err = install_sidebar(&mut doc, &SidebarOptions::default()).unwrap_err();
        assert_eq!(err, SidebarError::MissingContainer("main".to_string()));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_on_ready_runs_once() {
        init_logger();
        let mut doc = parse_document(PAGE);
        let opts = SidebarOptions::default();

        assert!(on_ready(&mut doc, &opts).unwrap().is_some());
        let after_first = doc.to_html();
        assert!(on_ready(&mut doc, &opts).unwrap().is_none());
        assert_eq!(doc.to_html(), after_first);
    }

    #[test]
    fn test_on_ready_skips_pages_without_marker() {
        let mut doc = parse_document("<div id=\"main\"><h2>A</h2></div>");
        let before = doc.clone();
        assert!(on_ready(&mut doc, &SidebarOptions::default()).unwrap().is_none());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_custom_title_and_ids() {
        let opts = SidebarOptions {
            opt_in_id: "toc-please".into(),
            sidebar_id: "toc".into(),
            main_id: "content".into(),
            title: "On this page".into(),
            id_prefix: "sec-".into(),
            require_opt_in: true,
        };
        let mut doc =
            parse_document("<i id=\"toc-please\"></i><article id=\"content\"><h2>One</h2></article>");
        on_ready(&mut doc, &opts).unwrap();

        let toc = doc.find_by_id("toc").unwrap();
        assert_eq!(
            toc.to_html(),
            "<div id=\"toc\"><h3>On this page</h3><ul><li><a href=\"#sec-0\">One</a></li></ul></div>"
        );
    }
}
