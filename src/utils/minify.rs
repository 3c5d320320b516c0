//! HTML minification for rendered pages.

use std::borrow::Cow;

/// Minify a rendered page when `enabled`.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify_page(html: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        Cow::Owned(minify_html_inner(html))
    } else {
        Cow::Borrowed(html)
    }
}

/// Minify HTML content using `minify_html` crate.
///
/// Closing tags and the `<template>` contents stay intact so the page keeps
/// its DOM contract after minification.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    minify_html::minify(html, &cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_disabled_borrows() {
        let html = b"<p>  hello  </p>";
        let out = minify_page(html, false);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out.as_ref(), html);
    }

    #[test]
    fn test_minify_enabled_shrinks() {
        let html = b"<div>\n    <!-- note -->\n    <p>hello</p>\n</div>\n";
        let out = minify_page(html, true);
        assert!(out.len() < html.len());
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("hello"));
        assert!(!text.contains("note"));
    }
}
