//! View-models for the two page views.
//!
//! Everything here is pure: posts and view state go in, plain serializable
//! data comes out. Writing that data into HTML is the job of [`crate::page`].

pub mod index;
pub mod post;

pub use index::{IndexView, PostCard, SortOrder, ViewState};
pub use post::PostOutcome;

use crate::utils::{date, url};

/// Display settings shared by both views.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    /// strftime pattern for displayed dates
    pub date_format: &'a str,
    /// Page that renders one post, target of every post link
    pub post_page: &'a str,
    /// Appended to the post title in the document `<title>`
    pub site_title: &'a str,
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Self {
            date_format: date::DEFAULT_DATE_FORMAT,
            post_page: url::DEFAULT_POST_PAGE,
            site_title: post::DEFAULT_SITE_TITLE,
        }
    }
}

impl Formatter<'_> {
    #[inline]
    pub fn date(&self, iso: &str) -> String {
        date::format_date(iso, self.date_format)
    }

    #[inline]
    pub fn post_url(&self, slug: &str) -> String {
        url::post_url(self.post_page, slug)
    }

    #[inline]
    pub fn document_title(&self, post_title: &str) -> String {
        format!("{post_title} — {}", self.site_title)
    }
}
