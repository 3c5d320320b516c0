use quick_xml::{
    Reader, Writer,
    escape::unescape,
    events::{BytesStart, BytesText, Event},
};
use std::borrow::Cow;
use std::io::Cursor;

use super::PageError;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// HTML elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&[u8]] = &[
    b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
    b"source", b"track", b"wbr",
];

#[inline]
pub fn create_xml_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader
}

#[inline]
pub fn create_xml_writer(capacity: usize) -> XmlWriter {
    Writer::new(Cursor::new(Vec::with_capacity(capacity)))
}

#[inline]
pub fn is_void_element(name: &[u8]) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// Lowercased tag name of an element.
#[inline]
pub fn tag_name(elem: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(elem.name().as_ref()).to_ascii_lowercase()
}

/// Unescaped value of attribute `key`, if present.
///
/// Valueless HTML attributes (`<option selected>`) yield an empty string.
pub fn attr_value(elem: &BytesStart<'_>, key: &str) -> Option<String> {
    elem.html_attributes()
        .flatten()
        .find(|attr| attr.key.as_ref().eq_ignore_ascii_case(key.as_bytes()))
        .map(|attr| {
            let raw = String::from_utf8_lossy(&attr.value);
            match unescape(&raw) {
                Ok(value) => value.into_owned(),
                // HTML-only entities such as `&nbsp;` stay as written
                Err(_) => raw.to_string(),
            }
        })
}

/// Rebuild an element with transformed attributes.
///
/// `transform` returns `None` to drop an attribute. Extra attributes are
/// appended afterwards, already unescaped.
pub fn rebuild_elem<F>(
    elem: &BytesStart<'_>,
    mut transform: F,
    extra: &[(&str, &str)],
) -> BytesStart<'static>
where
    F: FnMut(&[u8], Cow<'_, [u8]>) -> Option<Cow<'static, [u8]>>,
{
    let tag = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    let attrs: Vec<_> = elem
        .html_attributes()
        .flatten()
        .filter_map(|attr| {
            let key = attr.key.as_ref().to_vec();
            transform(attr.key.as_ref(), attr.value).map(|value| (key, value))
        })
        .collect();

    let mut new_elem = BytesStart::new(tag);
    for (k, v) in attrs {
        new_elem.push_attribute((k.as_slice(), v.as_ref()));
    }
    for (k, v) in extra {
        new_elem.push_attribute((*k, *v));
    }
    new_elem
}

/// Write escaped text.
#[inline]
pub fn write_text(writer: &mut XmlWriter, text: &str) -> Result<(), PageError> {
    writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(())
}

/// Write markup verbatim.
#[inline]
pub fn write_raw_html(writer: &mut XmlWriter, html: &str) -> Result<(), PageError> {
    writer.write_event(Event::Text(BytesText::from_escaped(html)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_start(html: &str) -> BytesStart<'static> {
        let mut reader = create_xml_reader(html.as_bytes());
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => return e.into_owned(),
                Event::Eof => panic!("no element in {html}"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_void_elements() {
        assert!(is_void_element(b"input"));
        assert!(is_void_element(b"META"));
        assert!(!is_void_element(b"div"));
        assert!(!is_void_element(b"template"));
    }

    #[test]
    fn test_attr_value_unescapes() {
        let elem = first_start(r#"<a href="post.html?slug=a&amp;b" class="x">"#);
        assert_eq!(attr_value(&elem, "href").as_deref(), Some("post.html?slug=a&b"));
        assert_eq!(attr_value(&elem, "CLASS").as_deref(), Some("x"));
        assert_eq!(attr_value(&elem, "id"), None);
    }

    #[test]
    fn test_attr_value_valueless() {
        let elem = first_start("<option value=\"newest\" selected>");
        assert_eq!(attr_value(&elem, "selected").as_deref(), Some(""));
    }

    #[test]
    fn test_rebuild_elem_drops_and_appends() {
        let elem = first_start(r#"<a href="old" class="read-more">"#);
        let rebuilt = rebuild_elem(
            &elem,
            |key, value| (key != b"href").then(|| value.into_owned().into()),
            &[("href", "new&url")],
        );
        assert_eq!(attr_value(&rebuilt, "href").as_deref(), Some("new&url"));
        assert_eq!(attr_value(&rebuilt, "class").as_deref(), Some("read-more"));
        assert_eq!(rebuilt.attributes().count(), 2);
    }
}
