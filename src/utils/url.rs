//! Navigation URLs between the index and post pages.

use std::borrow::Cow;

/// Page that renders a single post.
pub const DEFAULT_POST_PAGE: &str = "post.html";

/// Query parameter carrying the post slug.
pub const SLUG_PARAM: &str = "slug";

/// Relative URL of `page` showing `slug`: `post.html?slug=<encoded>`.
pub fn post_url(page: &str, slug: &str) -> String {
    format!("{page}?{SLUG_PARAM}={}", urlencoding::encode(slug))
}

/// Extract a query parameter from a URL or a bare query string.
///
/// Mirrors `URLSearchParams::get`: the first occurrence wins, `+` decodes
/// to a space, and invalid UTF-8 in escapes is replaced lossily.
///
/// | Location | `key` | Result |
/// |----------|-------|--------|
/// | `post.html?slug=a%20b` | `slug` | `Some("a b")` |
/// | `?slug=x&slug=y` | `slug` | `Some("x")` |
/// | `slug=x` | `slug` | `Some("x")` |
/// | `post.html` | `slug` | `None` |
pub fn query_param(location: &str, key: &str) -> Option<String> {
    let query = match location.split_once('?') {
        Some((_, query)) => query,
        None if location.contains('=') => location,
        None => return None,
    };
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode_component(k) == key)
        .map(|(_, v)| decode_component(v).into_owned())
}

/// Percent-decode one form-encoded component.
fn decode_component(raw: &str) -> Cow<'_, str> {
    let raw: Cow<'_, str> = if raw.contains('+') {
        raw.replace('+', " ").into()
    } else {
        raw.into()
    };

    if !raw.contains('%') {
        return raw;
    }
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned().into(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes()))
            .into_owned()
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url_plain_slug() {
        assert_eq!(post_url(DEFAULT_POST_PAGE, "my-post"), "post.html?slug=my-post");
    }

    #[test]
    fn test_post_url_encodes_unsafe_chars() {
        assert_eq!(post_url(DEFAULT_POST_PAGE, "a b&c/d"), "post.html?slug=a%20b%26c%2Fd");
    }

    #[test]
    fn test_post_url_with_custom_page() {
        assert_eq!(post_url("article.html", "x"), "article.html?slug=x");
    }

    #[test]
    fn test_slug_round_trip() {
        let slugs = [
            "hello-world",
            "with space",
            "a&b=c",
            "path/like/slug",
            "plus+sign",
            "percent%20literal",
            "hash#tag?",
            "ünïcödé 日本",
            "",
        ];
        for slug in slugs {
            let url = post_url(DEFAULT_POST_PAGE, slug);
            assert_eq!(
                query_param(&url, SLUG_PARAM).as_deref(),
                Some(slug),
                "round trip failed for {slug:?} via {url}"
            );
        }
    }

    #[test]
    fn test_query_param_first_occurrence_wins() {
        assert_eq!(query_param("?slug=x&slug=y", "slug").as_deref(), Some("x"));
    }

    #[test]
    fn test_query_param_bare_query_and_fragment() {
        assert_eq!(query_param("slug=abc", "slug").as_deref(), Some("abc"));
        assert_eq!(
            query_param("https://example.com/post.html?slug=abc#top", "slug").as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_query_param_plus_is_space() {
        assert_eq!(query_param("?slug=a+b", "slug").as_deref(), Some("a b"));
    }

    #[test]
    fn test_query_param_missing() {
        assert_eq!(query_param("post.html", "slug"), None);
        assert_eq!(query_param("post.html?other=1", "slug"), None);
        assert_eq!(query_param("post.html?", "slug"), None);
    }

    #[test]
    fn test_query_param_key_without_value() {
        assert_eq!(query_param("?slug", "slug").as_deref(), Some(""));
    }
}
