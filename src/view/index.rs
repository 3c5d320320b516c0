//! Index page: search, sort and the post-card view-model.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use super::Formatter;
use crate::data::Post;
use crate::utils::date::parse_date;

/// Literal shown in the `#posts` container when nothing matches.
pub const NO_POSTS_HTML: &str = "<p>No posts found.</p>";

/// Value of the `#sort` select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent first (default)
    #[default]
    Newest,
    /// Oldest first
    Oldest,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Interpret a raw select value.
    ///
    /// Only `"newest"` sorts descending; every other value sorts ascending.
    pub fn from_select_value(value: &str) -> Self {
        if value == "newest" { Self::Newest } else { Self::Oldest }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the index page controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Raw text of the `#search` input
    pub query: String,
    /// Selected `#sort` option
    pub sort: SortOrder,
}

impl ViewState {
    pub fn new(query: impl Into<String>, sort: SortOrder) -> Self {
        Self {
            query: query.into(),
            sort,
        }
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self::new(query, self.sort)
    }

    pub fn with_sort(&self, sort: SortOrder) -> Self {
        Self::new(self.query.clone(), sort)
    }
}

/// Filter and sort `posts` for `state`, leaving the source untouched.
///
/// - A post matches when its lowercased `title excerpt tags` contains the
///   lowercased, trimmed query. An empty query matches everything.
/// - Posts are ordered by parsed date. The sort is stable, so posts with
///   equal dates keep their data-file order. Unparseable dates count as
///   older than any valid date.
pub fn compute_listing<'a>(posts: &'a [Post], state: &ViewState) -> Vec<&'a Post> {
    let needle = state.query.trim().to_lowercase();

    let mut list: Vec<&Post> = if needle.is_empty() {
        posts.iter().collect()
    } else {
        posts
            .iter()
            .filter(|p| p.search_text().contains(&needle))
            .collect()
    };

    list.sort_by(|a, b| {
        let ord = compare_dates(&a.date, &b.date);
        match state.sort {
            SortOrder::Newest => ord.reverse(),
            SortOrder::Oldest => ord,
        }
    });
    list
}

/// Ascending date comparison; `None` sorts before every parsed date.
fn compare_dates(a: &str, b: &str) -> Ordering {
    parse_date(a).cmp(&parse_date(b))
}

/// One post card on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub title: String,
    /// Link target of both the title and the "read more" link
    pub url: String,
    /// Formatted date shown to the reader
    pub date: String,
    /// Raw ISO date for the `datetime` attribute
    pub datetime: String,
    pub excerpt: String,
}

impl PostCard {
    pub fn from_post(post: &Post, fmt: &Formatter<'_>) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            url: fmt.post_url(&post.slug),
            date: fmt.date(&post.date),
            datetime: post.date.clone(),
            excerpt: post.excerpt.clone(),
        }
    }
}

/// What the `#posts` container shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum IndexView {
    Cards(Vec<PostCard>),
    Empty,
}

impl IndexView {
    /// Build the view-model for the current state.
    pub fn build(posts: &[Post], state: &ViewState, fmt: &Formatter<'_>) -> Self {
        let cards: Vec<_> = compute_listing(posts, state)
            .into_iter()
            .map(|post| PostCard::from_post(post, fmt))
            .collect();

        if cards.is_empty() {
            Self::Empty
        } else {
            Self::Cards(cards)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Cards(cards) => cards.len(),
            Self::Empty => 0,
        }
    }
}
