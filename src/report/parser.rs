//! Report parsing
//!
//! Builds a small element tree out of the report text and exposes the two
//! positions the converter relies on: the error container (second child of the
//! root) and the location of an error (its first child). Nothing is validated
//! against a schema; these positions are the whole contract.

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ReportError, ReportResult};

/// Tag of a finding inside the error container
pub const ERROR_TAG: &str = "error";
/// Tag of the optional location child of a finding
pub const LOCATION_TAG: &str = "location";

/// Position of the error container among the root's child elements
const ERROR_CONTAINER_INDEX: usize = 1;

/// An element of the report with its attributes and child elements.
/// Text content is not kept, the converter never looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified tag name as written in the document
    pub tag: String,
    /// Attributes in document order, values already unescaped
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Creates an element without attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first child element when it is tagged `location`.
    ///
    /// Only the first child is ever inspected: a `location` that comes after
    /// some other child is not found.
    pub fn first_child_location(&self) -> Option<&XmlElement> {
        self.children
            .first()
            .filter(|child| child.tag == LOCATION_TAG)
    }
}

/// A parsed report whose root is known to hold an error container
#[derive(Debug, Clone)]
pub struct Report {
    root: XmlElement,
}

impl Report {
    /// Wraps an already built root element, checking the container position
    pub fn from_root(root: XmlElement) -> ReportResult<Self> {
        let report = Self { root };
        report.error_container()?;
        Ok(report)
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Returns the root's child element at index 1, whatever its tag
    pub fn error_container(&self) -> ReportResult<&XmlElement> {
        self.root
            .children
            .get(ERROR_CONTAINER_INDEX)
            .ok_or_else(|| ReportError::MissingErrorContainer {
                root: self.root.tag.clone(),
                found: self.root.children.len(),
            })
    }

    /// Returns the container's children tagged `error`, in document order.
    /// Children with any other tag are skipped.
    pub fn errors(&self) -> ReportResult<impl Iterator<Item = &XmlElement>> {
        Ok(self
            .error_container()?
            .children
            .iter()
            .filter(|child| child.tag == ERROR_TAG))
    }
}

/// Parses report text into a [`Report`].
///
/// ## Errors
///
/// * `ReportError::Xml` / `Attribute` / `Utf8` for syntax problems
/// * `ReportError::MissingRoot` when there is no element at all
/// * `ReportError::UnclosedElement` when the text stops inside an element
/// * `ReportError::TrailingContent` for text or a second element outside the root
/// * `ReportError::MissingErrorContainer` when the root has fewer than two children
pub fn parse_report(text: &str) -> ReportResult<Report> {
    let root = parse_document(text)?;
    log::debug!(
        "Parsed report root <{}> with {} child element(s)",
        root.tag,
        root.children.len()
    );
    Report::from_root(root)
}

fn parse_document(text: &str) -> ReportResult<XmlElement> {
    let mut reader = Reader::from_str(text);
    let decoder = reader.decoder();

    let mut open_elements: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                open_elements.push(read_element(e, decoder)?);
            }
            Event::Empty(ref e) => {
                let element = read_element(e, decoder)?;
                attach(&mut open_elements, &mut root, element)?;
            }
            Event::End(_) => {
                // end names are checked by the reader, so this closes the innermost element
                if let Some(element) = open_elements.pop() {
                    attach(&mut open_elements, &mut root, element)?;
                }
            }
            Event::Text(ref e) if open_elements.is_empty() => {
                if !e.iter().all(u8::is_ascii_whitespace) {
                    return Err(ReportError::TrailingContent {
                        content: String::from_utf8_lossy(e).trim().to_string(),
                    });
                }
            }
            Event::GeneralRef(_) if open_elements.is_empty() => {
                return Err(ReportError::TrailingContent {
                    content: "entity or character reference".to_string(),
                });
            }
            Event::CData(_) if open_elements.is_empty() => {
                return Err(ReportError::TrailingContent {
                    content: "CDATA section".to_string(),
                });
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open_elements.last() {
        return Err(ReportError::UnclosedElement {
            tag: unclosed.tag.clone(),
        });
    }

    root.ok_or(ReportError::MissingRoot)
}

/// Hangs a finished element under its parent, or makes it the root
fn attach(
    open_elements: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> ReportResult<()> {
    match open_elements.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_some() => Err(ReportError::TrailingContent {
            content: format!("<{}>", element.tag),
        }),
        None => {
            *root = Some(element);
            Ok(())
        }
    }
}

fn read_element(start: &BytesStart<'_>, decoder: Decoder) -> ReportResult<XmlElement> {
    let tag = std::str::from_utf8(start.name().as_ref())?.to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        tag,
        attributes,
        children: Vec::new(),
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
