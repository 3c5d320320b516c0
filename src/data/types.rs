//! Data types for the blog's data file.
//!
//! These types are deserialized from `posts.json`.

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// One entry of the data file's `posts` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier used in navigation URLs (e.g., "hello-world").
    /// Uniqueness is assumed, not enforced.
    pub slug: String,

    /// Display title
    pub title: String,

    /// Publication date as ISO 8601 string (e.g., "2024-01-15").
    /// Kept verbatim; parsed on demand.
    pub date: String,

    /// Short summary shown on the index page
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Tags, searched together with title and excerpt
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Pre-sanitized HTML body, injected into the post page verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_html: String,
}

impl Post {
    /// Lowercased `title excerpt tags...` haystack used by the index search.
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.excerpt.len() + self.tags.iter().map(|t| t.len() + 1).sum::<usize>() + 1,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.excerpt);
        text.push(' ');
        text.push_str(&self.tags.join(" "));
        text.to_lowercase()
    }
}

/// `null` reads like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level shape of the data file: `{ "posts": [...] }`.
#[derive(Debug, Deserialize)]
pub(super) struct DataDocument {
    pub posts: Vec<Post>,
}

/// The posts of one page view, in data-file order.
///
/// Immutable once loaded: there is no way to add, remove or reorder posts.
/// Views filter and sort by borrowing into new vectors.
#[derive(Debug, Clone, Default)]
pub struct PostCollection {
    posts: Arc<[Post]>,
}

impl PostCollection {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts: posts.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// First post whose slug matches exactly.
    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }
}

impl From<Vec<Post>> for PostCollection {
    fn from(posts: Vec<Post>) -> Self {
        Self::new(posts)
    }
}
