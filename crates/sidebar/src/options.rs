/// Marker id a page carries to ask for a sidebar.
pub const DEFAULT_OPT_IN_ID: &str = "with-index";
/// Id given to the generated sidebar container; its presence means the sidebar is built.
pub const DEFAULT_SIDEBAR_ID: &str = "sidebar";
/// Id of the container the sidebar is placed after.
pub const DEFAULT_MAIN_ID: &str = "main";
pub const DEFAULT_TITLE: &str = "Chapters";
/// Prefix of synthesized heading ids (`header_0`, `header_1`, ...).
pub const DEFAULT_ID_PREFIX: &str = "header_";

/// Ids and labels the sidebar builder works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarOptions {
    pub opt_in_id: String,
    pub sidebar_id: String,
    pub main_id: String,
    pub title: String,
    pub id_prefix: String,
    /// When false, pages are processed without the opt-in marker.
    /// An existing sidebar still prevents a second build.
    pub require_opt_in: bool,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            opt_in_id: DEFAULT_OPT_IN_ID.to_string(),
            sidebar_id: DEFAULT_SIDEBAR_ID.to_string(),
            main_id: DEFAULT_MAIN_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            require_opt_in: true,
        }
    }
}
