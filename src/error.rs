// src/error.rs
use docnav_sidebar::SidebarError;
use thiserror::Error;

/// Top-level error for page processing and the CLI.
#[derive(Error, Debug)]
pub enum DocnavError {
    #[error("Sidebar generation failed: {0}")]
    Sidebar(#[from] SidebarError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
