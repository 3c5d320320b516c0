//! Post page rendering.

use super::PageError;
use super::rewrite::{Patch, rewrite};
use crate::view::PostOutcome;

/// Render `outcome` into the post page template `html`.
///
/// A missing or unknown post replaces the whole `#post-article` content with
/// a message. A found post fills the title, date and body slots and sets the
/// document `<title>`.
pub fn render_post_page(html: &[u8], outcome: &PostOutcome) -> Result<Vec<u8>, PageError> {
    let patches = match outcome {
        PostOutcome::Found(detail) => vec![
            Patch::new("title").text(detail.document_title.as_str()),
            Patch::new("#post-title").text(detail.title.as_str()),
            Patch::new("#post-date")
                .text(detail.date.as_str())
                .attr("datetime", detail.datetime.as_str()),
            Patch::new("#post-body").html(detail.body_html.as_str()),
        ],
        PostOutcome::NoSlug | PostOutcome::NotFound => {
            let message = outcome.message_html().unwrap_or_default();
            vec![Patch::new("#post-article").html(message)]
        }
    };
    rewrite(html, &patches)
}
