// src/processor.rs
use std::path::Path;

use docnav_dom::parse_document;
use docnav_sidebar::{SidebarOptions, build_page_tree, on_ready};
use docnav_types::NavTree;
use log::{debug, info, warn};

use crate::config::SidebarConfig;
use crate::error::DocnavError;

/// A builder for creating a `PageProcessor`.
#[derive(Debug, Default)]
pub struct PageProcessorBuilder {
    config: SidebarConfig,
    title: Option<String>,
    main_id: Option<String>,
    force: bool,
}

impl PageProcessorBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Uses the given settings as the base configuration.
    pub fn with_config(mut self, config: SidebarConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the base configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, DocnavError> {
        self.config = SidebarConfig::from_file(path)?;
        Ok(self)
    }

    /// Overrides the sidebar title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the id of the container the sidebar is placed after.
    pub fn with_main_id(mut self, main_id: impl Into<String>) -> Self {
        self.main_id = Some(main_id.into());
        self
    }

    /// Builds the sidebar even on pages without the opt-in marker.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn build(self) -> Result<PageProcessor, DocnavError> {
        let mut config = self.config;
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(main_id) = self.main_id {
            config.main_id = main_id;
        }
        if self.force {
            config.require_opt_in = false;
        }
        config.validate()?;

        Ok(PageProcessor {
            options: config.into(),
        })
    }
}

/// Runs the sidebar builder over whole HTML pages.
#[derive(Debug, Clone, Default)]
pub struct PageProcessor {
    options: SidebarOptions,
}

impl PageProcessor {
    pub fn new(options: SidebarOptions) -> Self {
        Self { options }
    }

    pub fn builder() -> PageProcessorBuilder {
        PageProcessorBuilder::new()
    }

    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    /// Parses the page, fires the page-ready handler and serializes the result.
    /// Pages the guard declines come back byte-for-byte as given.
    pub fn process_str(&self, html: &str) -> Result<String, DocnavError> {
        let mut document = parse_document(html);
        match on_ready(&mut document, &self.options)? {
            Some(tree) => {
                info!("sidebar built with {} top-level entries", tree.len());
                Ok(document.to_html())
            }
            None => {
                debug!("sidebar guard declined; page passed through unchanged");
                Ok(html.to_string())
            }
        }
    }

    /// Like [`process_str`](Self::process_str), but a failure to place the
    /// sidebar returns the input untouched instead of an error.
    pub fn process_lenient(&self, html: &str) -> String {
        match self.process_str(html) {
            Ok(out) => out,
            Err(e) => {
                warn!("{e}; page passed through unchanged");
                html.to_string()
            }
        }
    }

    /// The navigation tree the page's headings would produce. The ids in the
    /// result are the ones the sidebar would link to.
    pub fn outline(&self, html: &str) -> NavTree {
        let mut document = parse_document(html);
        build_page_tree(&mut document, &self.options.id_prefix)
    }
}
