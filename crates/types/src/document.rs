use serde::Serialize;
use std::fmt;

/// The two heading levels that take part in the chapter index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// A chapter heading (`<h2>`).
    H2,
    /// A section heading (`<h3>`), nested under the preceding chapter.
    H3,
}

impl HeadingLevel {
    /// Maps an element tag name to a heading level. Case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("h2") {
            Some(HeadingLevel::H2)
        } else if tag.eq_ignore_ascii_case("h3") {
            Some(HeadingLevel::H3)
        } else {
            None
        }
    }

    /// The lowercase tag name for this level.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A heading detached from any document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    /// The visible text of the heading.
    pub text: String,
    /// The anchor id, if one has been authored or assigned.
    pub id: Option<String>,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: None,
        }
    }

    pub fn h2(text: impl Into<String>) -> Self {
        Self::new(HeadingLevel::H2, text)
    }

    pub fn h3(text: impl Into<String>) -> Self {
        Self::new(HeadingLevel::H3, text)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// One line of the generated sidebar: a link to a heading plus its sub-entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    /// Link target, always `#` followed by the heading id.
    pub href: String,
    /// The heading text shown as the link label.
    pub label: String,
    /// Sub-entries. Only chapter entries ever have any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    /// Creates a childless entry linking to the given heading id.
    pub fn link(id: &str, label: impl Into<String>) -> Self {
        Self {
            href: format!("#{id}"),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// The heading id this entry points at (the href without its leading `#`).
    pub fn target_id(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The ordered list of top-level sidebar entries, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    entries: Vec<NavEntry>,
}

impl NavTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: NavEntry) {
        self.entries.push(entry);
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries at both levels. Equals the number of headings the tree was built from.
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(|e| 1 + e.children.len()).sum()
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavEntry> {
        self.entries.iter()
    }
}

impl From<Vec<NavEntry>> for NavTree {
    fn from(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a NavTree {
    type Item = &'a NavEntry;
    type IntoIter = std::slice::Iter<'a, NavEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
