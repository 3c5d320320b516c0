//! The small selector subset the page contracts need.
//!
//! | Selector | Matches |
//! |----------|---------|
//! | `#posts` | element with `id="posts"` |
//! | `.card` | element whose `class` list contains `card` |
//! | `title` | `<title>` elements |
//! | `.post-title a` | `<a>` inside an element with class `post-title` |

use quick_xml::events::BytesStart;

use super::common::{attr_value, tag_name};

/// An element as seen by the selector matcher.
#[derive(Debug, Clone, Default)]
pub struct ElementInfo {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl ElementInfo {
    pub fn from_start(elem: &BytesStart<'_>) -> Self {
        Self {
            tag: tag_name(elem),
            id: attr_value(elem, "id"),
            classes: attr_value(elem, "class")
                .map(|c| c.split_ascii_whitespace().map(str::to_owned).collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Simple {
    Id(String),
    Class(String),
    Tag(String),
}

impl Simple {
    fn parse(s: &str) -> Self {
        if let Some(id) = s.strip_prefix('#') {
            Self::Id(id.to_owned())
        } else if let Some(class) = s.strip_prefix('.') {
            Self::Class(class.to_owned())
        } else {
            Self::Tag(s.to_ascii_lowercase())
        }
    }

    fn matches(&self, elem: &ElementInfo) -> bool {
        match self {
            Self::Id(id) => elem.id.as_deref() == Some(id.as_str()),
            Self::Class(class) => elem.classes.iter().any(|c| c == class),
            Self::Tag(tag) => elem.tag == *tag,
        }
    }
}

/// A simple selector, optionally scoped to a descendant of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    ancestor: Option<Simple>,
    target: Simple,
}

impl Selector {
    /// Parse `"#id"`, `".class"`, `"tag"` or `"<simple> <simple>"`.
    pub fn parse(s: &str) -> Self {
        let mut parts = s.split_ascii_whitespace();
        let first = parts.next().unwrap_or_default();
        match parts.next() {
            Some(second) => Self {
                ancestor: Some(Simple::parse(first)),
                target: Simple::parse(second),
            },
            None => Self {
                ancestor: None,
                target: Simple::parse(first),
            },
        }
    }

    /// Does `elem`, nested inside `ancestors` (outermost first), match?
    pub fn matches(&self, elem: &ElementInfo, ancestors: &[ElementInfo]) -> bool {
        self.target.matches(elem)
            && self
                .ancestor
                .as_ref()
                .is_none_or(|a| ancestors.iter().any(|e| a.matches(e)))
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
