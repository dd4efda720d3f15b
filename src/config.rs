// src/config.rs
use std::fs;
use std::io;
use std::path::Path;

use docnav_sidebar::SidebarOptions;
use docnav_sidebar::options::{
    DEFAULT_ID_PREFIX, DEFAULT_MAIN_ID, DEFAULT_OPT_IN_ID, DEFAULT_SIDEBAR_ID, DEFAULT_TITLE,
};
use serde::Deserialize;

use crate::error::DocnavError;

/// Sidebar settings as read from a JSON config file. Every key is optional.
///
/// ```json
/// { "mainId": "content", "title": "On this page", "requireOptIn": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SidebarConfig {
    pub opt_in_id: String,
    pub sidebar_id: String,
    pub main_id: String,
    pub title: String,
    pub id_prefix: String,
    pub require_opt_in: bool,
}

impl Default for SidebarConfig {
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

impl SidebarConfig {
    pub fn from_json(json: &str) -> Result<Self, DocnavError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DocnavError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            DocnavError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    /// Rejects empty ids: an empty marker id would match nothing and an empty
    /// sidebar id would make the sidebar undetectable on a second pass.
    pub fn validate(&self) -> Result<(), DocnavError> {
        for (key, value) in [
            ("optInId", &self.opt_in_id),
            ("sidebarId", &self.sidebar_id),
            ("mainId", &self.main_id),
        ] {
            if value.trim().is_empty() {
                return Err(DocnavError::Config(format!("'{key}' must not be empty")));
            }
        }
        Ok(())
    }
}

impl From<SidebarConfig> for SidebarOptions {
    fn from(config: SidebarConfig) -> Self {
        SidebarOptions {
            opt_in_id: config.opt_in_id,
            sidebar_id: config.sidebar_id,
            main_id: config.main_id,
            title: config.title,
            id_prefix: config.id_prefix,
            require_opt_in: config.require_opt_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = SidebarConfig::from_json("{}").unwrap();
        assert_eq!(config, SidebarConfig::default());
        assert_eq!(SidebarOptions::from(config), SidebarOptions::default());
    }

    #[test]
    fn test_partial_config_overrides_only_given_keys() {
        let config =
            SidebarConfig::from_json(r#"{ "mainId": "content", "title": "On this page" }"#)
                .unwrap();
        assert_eq!(config.main_id, "content");
        assert_eq!(config.title, "On this page");
        assert_eq!(config.sidebar_id, "sidebar");
        assert!(config.require_opt_in);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = SidebarConfig::from_json(r#"{ "mainID": "content" }"#).unwrap_err();
        assert!(matches!(err, DocnavError::Json(_)));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let err = SidebarConfig::from_json(r#"{ "sidebarId": " " }"#).unwrap_err();
        assert!(matches!(err, DocnavError::Config(ref m) if m.contains("sidebarId")));
    }
}
