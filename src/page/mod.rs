//! HTML page templates.
//!
//! The page templates play the role of the browser DOM: a template is
//! scanned for its anchors, then rewritten with the content of a view-model.
//!
//! # Index page contract
//!
//! | Element | Role |
//! |---------|------|
//! | `#posts` | cards container |
//! | `template#post-card-template` | one card: `.card`, `.post-title a`, `.post-date`, `.post-excerpt`, `.read-more` |
//! | `#search` | text input, receives the query as `value` |
//! | `#sort` | select with `newest` / `oldest` options |
//!
//! # Post page contract
//!
//! | Element | Role |
//! |---------|------|
//! | `#post-article` | replaced by a message when no post resolves |
//! | `#post-title`, `#post-date`, `#post-body` | post content |
//! | `data-slug` on `#post-article` or `<meta name="post-slug">` | optional embedded slug |

mod anchor;
mod common;
mod index;
mod post;
mod rewrite;
mod selector;

pub use anchor::Anchors;
pub use index::IndexPage;
pub use post::render_post_page;

use thiserror::Error;

/// Template errors. Unlike data errors these are not recoverable: a
/// broken template cannot be rendered into anything sensible.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("malformed HTML at byte {position}")]
    Parse {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("failed to write HTML")]
    Io(#[from] std::io::Error),

    #[error("failed to write HTML")]
    Xml(#[from] quick_xml::Error),

    #[error("`<template id=\"{0}\">` not found in page")]
    MissingTemplate(&'static str),
}

impl PageError {
    pub(crate) fn parse(position: u64, source: quick_xml::Error) -> Self {
        Self::Parse { position, source }
    }
}
