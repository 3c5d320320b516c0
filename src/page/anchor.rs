//! Page-type detection.
//!
//! A template declares what it is through the elements it contains, the same
//! way the browser script looked for them after `DOMContentLoaded`.

use quick_xml::events::Event;

use super::PageError;
use super::common::{attr_value, create_xml_reader, tag_name};

/// Render target of the index page.
pub const INDEX_ANCHOR: &str = "posts";

/// Render target of the post page.
pub const POST_ANCHOR: &str = "post-article";

/// `<meta name="post-slug" content="...">` pins a page to one post.
const SLUG_META_NAME: &str = "post-slug";

/// `data-slug` on `#post-article` pins a page to one post.
const SLUG_DATA_ATTR: &str = "data-slug";

/// What a single scan of a template found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchors {
    /// An element with `id="posts"` exists
    pub index: bool,
    /// An element with `id="post-article"` exists
    pub post: bool,
    /// Slug embedded in the page itself, if any
    pub embedded_slug: Option<String>,
}

impl Anchors {
    /// Scan `html` for the page anchors and an embedded slug.
    pub fn scan(html: &[u8]) -> Result<Self, PageError> {
        let mut reader = create_xml_reader(html);
        let mut anchors = Self::default();

        loop {
            let event = reader
                .read_event()
                .map_err(|e| PageError::parse(reader.error_position(), e))?;

            match event {
                Event::Start(elem) | Event::Empty(elem) => {
                    match attr_value(&elem, "id").as_deref() {
                        Some(INDEX_ANCHOR) => anchors.index = true,
                        Some(POST_ANCHOR) => {
                            anchors.post = true;
                            if let Some(slug) = non_empty(attr_value(&elem, SLUG_DATA_ATTR)) {
                                anchors.embedded_slug.get_or_insert(slug);
                            }
                        }
                        _ => {}
                    }

                    if tag_name(&elem) == "meta"
                        && attr_value(&elem, "name").as_deref() == Some(SLUG_META_NAME)
                        && let Some(slug) = non_empty(attr_value(&elem, "content"))
                    {
                        anchors.embedded_slug.get_or_insert(slug);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(anchors)
    }
}

#[inline]
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
