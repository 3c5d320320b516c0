//! `[render]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in miniblog.toml - how pages are rendered.
///
/// # Example
/// ```toml
/// [render]
/// date_format = "%Y-%m-%d"
/// post_page = "article.html"
/// minify = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// strftime pattern for displayed dates ("Jan 5, 2024" by default).
    #[serde(default = "defaults::render::date_format")]
    #[educe(Default = defaults::render::date_format())]
    pub date_format: String,

    /// Page that shows a single post, target of the card links.
    #[serde(default = "defaults::render::post_page")]
    #[educe(Default = defaults::render::post_page())]
    pub post_page: String,

    /// Minify rendered HTML.
    #[serde(default)]
    pub minify: bool,
}
