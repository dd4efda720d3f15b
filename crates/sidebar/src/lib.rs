//! Chapter sidebar generation.
//!
//! The grouping algorithm (`build_tree`) works on anything implementing
//! [`HeadingNode`] and never touches a document. The only functions that read
//! or mutate a page are in `install`: [`should_build_sidebar`],
//! [`install_sidebar`] and the page-ready entry point [`on_ready`].

pub mod builder;
pub mod error;
pub mod heading;
pub mod install;
pub mod options;
pub mod render;

pub use builder::{
    assign_identifier, assign_identifier_with_prefix, build_entry, build_entry_with_prefix,
    build_tree, build_tree_with_prefix,
};
pub use error::SidebarError;
pub use heading::{HeadingNode, heading_from_element};
pub use install::{build_page_tree, install_sidebar, on_ready, should_build_sidebar};
pub use options::SidebarOptions;
pub use render::render_nav_tree;
