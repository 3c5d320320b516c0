//! Streaming HTML rewriter.
//!
//! A page is rewritten in a single pass: every element matching a
//! [`Patch`] selector gets that patch's edits, everything else is copied
//! through byte for byte.

use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::PageError;
use super::common::{
    XmlWriter, attr_value, create_xml_reader, create_xml_writer, is_void_element, rebuild_elem,
    write_raw_html, write_text,
};
use super::selector::{ElementInfo, Selector};

/// One edit applied to a matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the element's content with escaped text (`textContent = ...`)
    Text(String),
    /// Replace the element's content with markup (`innerHTML = ...`)
    Html(String),
    /// Set an attribute, replacing any existing value
    Attr(&'static str, String),
    /// Mark the element `selected` iff its `value` equals the given value
    SelectedIf(String),
}

/// Edits for every element matching `selector`.
#[derive(Debug, Clone)]
pub struct Patch {
    selector: Selector,
    edits: Vec<Edit>,
}

impl Patch {
    pub fn new(selector: impl Into<Selector>) -> Self {
        Self {
            selector: selector.into(),
            edits: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.edits.push(Edit::Text(text.into()));
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.edits.push(Edit::Html(html.into()));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.edits.push(Edit::Attr(name, value.into()));
        self
    }

    pub fn selected_if(mut self, value: impl Into<String>) -> Self {
        self.edits.push(Edit::SelectedIf(value.into()));
        self
    }
}

/// Attribute and content edits gathered for one element.
#[derive(Default)]
struct Pending<'p> {
    attrs: Vec<(&'static str, &'p str)>,
    selected_if: Option<&'p str>,
    content: Option<&'p Edit>,
}

impl<'p> Pending<'p> {
    fn collect(patches: &'p [Patch], info: &ElementInfo, ancestors: &[ElementInfo]) -> Self {
        let mut pending = Self::default();
        for patch in patches.iter().filter(|p| p.selector.matches(info, ancestors)) {
            for edit in &patch.edits {
                match edit {
                    Edit::Text(_) | Edit::Html(_) => pending.content = Some(edit),
                    Edit::Attr(name, value) => {
                        pending.attrs.retain(|(n, _)| n != name);
                        pending.attrs.push((*name, value.as_str()));
                    }
                    Edit::SelectedIf(value) => pending.selected_if = Some(value.as_str()),
                }
            }
        }
        pending
    }

    fn touches_attrs(&self) -> bool {
        !self.attrs.is_empty() || self.selected_if.is_some()
    }

    /// Rebuild the start tag with the attribute edits applied.
    fn apply_attrs(&self, elem: &BytesStart<'_>) -> BytesStart<'static> {
        let mut extra = self.attrs.clone();
        let mut drop_selected = false;
        if let Some(wanted) = self.selected_if {
            drop_selected = true;
            if attr_value(elem, "value").as_deref() == Some(wanted) {
                extra.push(("selected", "selected"));
            }
        }

        rebuild_elem(
            elem,
            |key, value| {
                let replaced = self
                    .attrs
                    .iter()
                    .any(|(name, _)| key.eq_ignore_ascii_case(name.as_bytes()));
                let deselected = drop_selected && key.eq_ignore_ascii_case(b"selected");
                (!replaced && !deselected).then(|| value.into_owned().into())
            },
            &extra,
        )
    }

    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), PageError> {
        match self.content {
            Some(Edit::Text(text)) => write_text(writer, text),
            Some(Edit::Html(html)) => write_raw_html(writer, html),
            _ => Ok(()),
        }
    }
}

/// Apply `patches` to `html`.
pub fn rewrite(html: &[u8], patches: &[Patch]) -> Result<Vec<u8>, PageError> {
    let mut reader = create_xml_reader(html);
    let mut writer = create_xml_writer(html.len());
    let mut open: Vec<ElementInfo> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| PageError::parse(reader.error_position(), e))?;

        match event {
            Event::Start(elem) => {
                let info = ElementInfo::from_start(&elem);
                let pending = Pending::collect(patches, &info, &open);
                let start = if pending.touches_attrs() {
                    pending.apply_attrs(&elem)
                } else {
                    elem.clone()
                };

                if pending.content.is_some() && !is_void_element(info.tag.as_bytes()) {
                    let end = BytesEnd::new(String::from_utf8_lossy(elem.name().as_ref()).into_owned());
                    reader
                        .read_to_end(elem.name())
                        .map_err(|e| PageError::parse(reader.error_position(), e))?;
                    writer.write_event(Event::Start(start))?;
                    pending.write_content(&mut writer)?;
                    writer.write_event(Event::End(end))?;
                } else {
                    writer.write_event(Event::Start(start))?;
                    if !is_void_element(info.tag.as_bytes()) {
                        open.push(info);
                    }
                }
            }
            Event::Empty(elem) => {
                let info = ElementInfo::from_start(&elem);
                let pending = Pending::collect(patches, &info, &open);
                let start = if pending.touches_attrs() {
                    pending.apply_attrs(&elem)
                } else {
                    elem
                };

                if pending.content.is_some() && !is_void_element(info.tag.as_bytes()) {
                    let end = BytesEnd::new(info.tag.clone());
                    writer.write_event(Event::Start(start))?;
                    pending.write_content(&mut writer)?;
                    writer.write_event(Event::End(end))?;
                } else {
                    writer.write_event(Event::Empty(start))?;
                }
            }
            Event::End(elem) => {
                let name = String::from_utf8_lossy(elem.name().as_ref()).to_ascii_lowercase();
                if let Some(pos) = open.iter().rposition(|e| e.tag == name) {
                    open.truncate(pos);
                }
                writer.write_event(Event::End(elem))?;
            }
            Event::Eof => break,
            other => writer.write_event(other)?,
        }
    }

    Ok(writer.into_inner().into_inner())
}

/// Raw markup between the tags of the first element with `id`.
pub fn inner_html(html: &[u8], id: &str) -> Result<Option<String>, PageError> {
    let mut reader = create_xml_reader(html);

    loop {
        let event = reader
            .read_event()
            .map_err(|e| PageError::parse(reader.error_position(), e))?;

        match event {
            Event::Start(elem) if attr_value(&elem, "id").as_deref() == Some(id) => {
                let span = reader
                    .read_to_end(elem.name())
                    .map_err(|e| PageError::parse(reader.error_position(), e))?;
                let inner = &html[span.start as usize..span.end as usize];
                return Ok(Some(String::from_utf8_lossy(inner).into_owned()));
            }
            Event::Empty(elem) if attr_value(&elem, "id").as_deref() == Some(id) => {
                return Ok(Some(String::new()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
