use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SidebarError {
    #[error("Main content container '#{0}' not found; nowhere to place the sidebar")]
    MissingContainer(String),
}
