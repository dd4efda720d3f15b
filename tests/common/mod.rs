#![allow(dead_code)]

pub mod fixtures;

use docnav::dom::{Document, Element, parse_document};
use docnav::{DocnavError, NavEntry, PageProcessor};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs the default processor over a page and parses the result back.
pub fn process_page(html: &str) -> Result<Document, DocnavError> {
    let out = PageProcessor::default().process_str(html)?;
    Ok(parse_document(&out))
}

/// The generated sidebar element, if the page has one.
pub fn sidebar_of(doc: &Document) -> Option<&Element> {
    doc.find_by_id("sidebar")
}

/// Labels of the top-level entries, each followed by its children's labels.
pub fn outline_labels(entries: &[NavEntry]) -> Vec<(String, Vec<String>)> {
    entries
        .iter()
        .map(|e| {
            (
                e.label.clone(),
                e.children.iter().map(|c| c.label.clone()).collect(),
            )
        })
        .collect()
}
