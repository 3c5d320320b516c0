//! `[data]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[data]` section in miniblog.toml - where posts come from.
///
/// # Example
/// ```toml
/// [data]
/// source = "https://example.github.io/blog/posts.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Post data file.
    /// - a path, relative to the rendered page's directory
    /// - an `http://` or `https://` URL, fetched without caching
    #[serde(default = "defaults::data::source")]
    #[educe(Default = defaults::data::source())]
    pub source: String,
}
