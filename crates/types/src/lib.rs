pub mod document;

pub use document::{Heading, HeadingLevel, NavEntry, NavTree};
