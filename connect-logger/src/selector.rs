use std::fmt;

/// Represents ways to locate elements in the rendered page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Select all elements with the given tag name
    Tag(String),
    /// Select using an XPath query
    XPath(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Tag(tag) => write!(f, "tag:{tag}"),
            Selector::XPath(path) => write!(f, "{path}"),
        }
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s {
            _ if s.starts_with('/') || s.starts_with('(') => Selector::XPath(s.to_string()),
            _ if s.to_lowercase().starts_with("tag:") => Selector::Tag(s[4..].trim().to_string()),
            // Bare words are tag names; the dashboard is queried either by
            // tag or by XPath, nothing else.
            _ => Selector::Tag(s.to_string()),
        }
    }
}
