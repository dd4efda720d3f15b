// crates/sidebar/src/heading.rs

use docnav_dom::Element;
use docnav_types::{Heading, HeadingLevel};

/// Read/write access to a heading, whether it lives in a document tree or not.
pub trait HeadingNode {
    fn level(&self) -> HeadingLevel;

    /// The text shown to readers.
    fn text(&self) -> String;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);
}

impl HeadingNode for Heading {
    fn level(&self) -> HeadingLevel {
        self.level
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Detaches an `h2`/`h3` element into a plain heading. Only h3 nests; any
/// other tag is treated as a chapter heading.
pub fn heading_from_element(el: &Element) -> Heading {
    let level = match HeadingLevel::from_tag(&el.tag) {
        Some(HeadingLevel::H3) => HeadingLevel::H3,
        _ => HeadingLevel::H2,
    };
    Heading {
        level,
        text: el.visible_text(),
        id: el.id().map(str::to_string),
    }
}
