//! Loading the data file.
//!
//! The data file is read fresh for every render: local files straight from
//! disk, remote files with cache-bypassing request headers. Failures never
//! reach the page; they are logged and the page renders as if the blog had
//! no posts.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use thiserror::Error;

use super::types::{DataDocument, PostCollection};
use crate::log;

/// Why the data file could not be turned into a post collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("request to `{0}` failed")]
    Http(String, #[source] reqwest::Error),

    #[error("failed to fetch `{0}`: {1}")]
    Status(String, u16),

    #[error("`{0}` is not a valid posts document")]
    Json(String, #[source] serde_json::Error),
}

/// Where the data file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A file on disk
    File(PathBuf),
    /// An `http://` or `https://` URL
    Remote(String),
}

impl DataSource {
    /// Interpret a configured source.
    ///
    /// URLs stay as-is; relative paths resolve against `base_dir`, the
    /// directory of the page being rendered.
    pub fn resolve(source: &str, base_dir: &Path) -> Self {
        if is_remote(source) {
            return Self::Remote(source.to_owned());
        }
        let path = Path::new(source);
        if path.is_absolute() {
            Self::File(path.to_path_buf())
        } else {
            Self::File(base_dir.join(path))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

#[inline]
fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load the post collection, degrading to an empty one on any failure.
pub fn load_posts(source: &DataSource) -> PostCollection {
    match try_load_posts(source) {
        Ok(posts) if posts.is_empty() => {
            log!("warn"; "no posts in {}", source);
            posts
        }
        Ok(posts) => {
            log!("data"; "loaded {} posts from {}", posts.len(), source);
            posts
        }
        Err(err) => {
            log!("error"; "{}", error_chain(&err));
            PostCollection::empty()
        }
    }
}

/// Load the post collection, reporting why it failed.
pub fn try_load_posts(source: &DataSource) -> Result<PostCollection, LoadError> {
    let body = match source {
        DataSource::File(path) => {
            fs::read_to_string(path).map_err(|err| LoadError::Io(path.clone(), err))?
        }
        DataSource::Remote(url) => fetch_remote(url)?,
    };
    parse_document(&body, &source.to_string())
}

/// Fetch a remote data file, bypassing HTTP caches.
fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let http_err = |err| LoadError::Http(url.to_owned(), err);

    let response = reqwest::blocking::Client::new()
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .map_err(http_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(url.to_owned(), status.as_u16()));
    }
    response.text().map_err(http_err)
}

/// Parse a `{ "posts": [...] }` document.
fn parse_document(body: &str, origin: &str) -> Result<PostCollection, LoadError> {
    let document: DataDocument =
        serde_json::from_str(body).map_err(|err| LoadError::Json(origin.to_owned(), err))?;
    Ok(PostCollection::new(document.posts))
}

/// Render an error with its sources: "outer: inner: root".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
