//! The blog's data file and the posts it holds.
//!
//! # Data file
//!
//! ```json
//! {
//!   "posts": [
//!     {
//!       "slug": "hello-world",
//!       "title": "Hello, World",
//!       "date": "2024-01-15",
//!       "excerpt": "First post.",
//!       "tags": ["intro"],
//!       "content_html": "<p>Welcome!</p>"
//!     }
//!   ]
//! }
//! ```
//!
//! `excerpt`, `tags` and `content_html` may be omitted or `null`. A document that does
//! not match this shape loads as an empty collection.

mod store;
mod types;

pub use store::{DataSource, load_posts};
pub use types::{Post, PostCollection};

#[cfg(test)]
pub(crate) use types::fixtures;
