//! docnav: chapter sidebars and snippet helpers for rendered documentation pages.
//!
//! The sidebar lists every h2 on a page as a chapter, with the h3s that follow
//! it nested underneath. It is inserted right after the page's main content
//! container, on pages that carry the opt-in marker. The building blocks live
//! in the workspace crates and are re-exported here; [`PageProcessor`] wires
//! them together for whole HTML pages.

pub mod config;
pub mod error;
pub mod processor;

pub use config::SidebarConfig;
pub use error::DocnavError;
pub use processor::{PageProcessor, PageProcessorBuilder};

pub use docnav_dom as dom;
pub use docnav_sidebar as sidebar;
pub use docnav_snippets as snippets;
pub use docnav_types as types;

pub use docnav_sidebar::{
    HeadingNode, SidebarError, SidebarOptions, assign_identifier, build_entry, build_tree,
    install_sidebar, on_ready, should_build_sidebar,
};
pub use docnav_snippets::{code_block, hint_box, html_escape};
pub use docnav_types::{Heading, HeadingLevel, NavEntry, NavTree};
