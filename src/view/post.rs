//! Post page: resolve one post by slug.

use serde::Serialize;

use super::Formatter;
use crate::data::{Post, PostCollection};

/// Site name appended to post titles in the document `<title>`.
pub const DEFAULT_SITE_TITLE: &str = "Mini GitHub Blog";

/// Literal shown in `#post-article` when the page has no slug.
pub const NO_SLUG_HTML: &str = "<p>No post specified.</p>";

/// Literal shown in `#post-article` when the slug matches nothing.
pub const NOT_FOUND_HTML: &str = "<p>Post not found.</p>";

/// Everything the post page displays for a resolved post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    pub slug: String,
    /// Full document title, e.g. "Hello — Mini GitHub Blog"
    pub document_title: String,
    pub title: String,
    pub date: String,
    pub datetime: String,
    /// Injected without escaping; sanitizing it is the data producer's job.
    pub body_html: String,
}

impl PostDetail {
    pub fn from_post(post: &Post, fmt: &Formatter<'_>) -> Self {
        Self {
            slug: post.slug.clone(),
            document_title: fmt.document_title(&post.title),
            title: post.title.clone(),
            date: fmt.date(&post.date),
            datetime: post.date.clone(),
            body_html: post.content_html.clone(),
        }
    }
}

/// Result of resolving the post page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "post", rename_all = "snake_case")]
pub enum PostOutcome {
    NoSlug,
    NotFound,
    Found(PostDetail),
}

impl PostOutcome {
    /// Resolve `slug` against a collection that is only loaded when a slug
    /// is present.
    pub fn resolve<F>(slug: Option<&str>, load: F, fmt: &Formatter<'_>) -> Self
    where
        F: FnOnce() -> PostCollection,
    {
        let Some(slug) = slug.filter(|s| !s.is_empty()) else {
            return Self::NoSlug;
        };
        let posts = load();
        match posts.find(slug) {
            Some(post) => Self::Found(PostDetail::from_post(post, fmt)),
            None => Self::NotFound,
        }
    }

    /// Inline message replacing the article, if any.
    pub fn message_html(&self) -> Option<&'static str> {
        match self {
            Self::NoSlug => Some(NO_SLUG_HTML),
            Self::NotFound => Some(NOT_FOUND_HTML),
            Self::Found(_) => None,
        }
    }
}
