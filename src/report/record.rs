//! Normalized findings
//!
//! A [`LogRecord`] is what the emitter works with: every field is filled in,
//! missing attributes are replaced by fixed defaults, and values are otherwise
//! taken verbatim (a line of `"abc"` stays `"abc"`).

use crate::report::parser::XmlElement;

pub const DEFAULT_KIND: &str = "warning";
pub const DEFAULT_MESSAGE: &str = "unknown";
pub const INTERNAL_FILE: &str = "[internal]";
pub const DEFAULT_POSITION: &str = "0";

/// One finding, ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity of the finding, used as the annotation command
    pub kind: String,
    pub message: String,
    pub file: String,
    pub line: String,
    pub column: String,
}

impl LogRecord {
    /// Builds a record from an `error` element.
    ///
    /// Location data comes from the element's first child, and only when that
    /// child is tagged `location`. Otherwise the record points at `[internal]`
    /// line 0 column 0.
    pub fn from_error_element(error: &XmlElement) -> Self {
        let kind = attribute_or(error, "severity", DEFAULT_KIND);
        let message = attribute_or(error, "msg", DEFAULT_MESSAGE);

        match error.first_child_location() {
            Some(location) => Self {
                kind,
                message,
                file: attribute_or(location, "file", INTERNAL_FILE),
                line: attribute_or(location, "line", DEFAULT_POSITION),
                column: attribute_or(location, "column", DEFAULT_POSITION),
            },
            None => Self {
                kind,
                message,
                file: INTERNAL_FILE.to_string(),
                line: DEFAULT_POSITION.to_string(),
                column: DEFAULT_POSITION.to_string(),
            },
        }
    }
}

fn attribute_or(element: &XmlElement, name: &str, default: &str) -> String {
    element.attribute(name).unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str, attributes: &[(&str, &str)]) -> XmlElement {
        let mut element = XmlElement::new(tag);
        element.attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        element
    }

    #[test]
    fn test_bare_error_uses_all_defaults() {
        let record = LogRecord::from_error_element(&element("error", &[]));

        assert_eq!(record.kind, "warning");
        assert_eq!(record.message, "unknown");
        assert_eq!(record.file, "[internal]");
        assert_eq!(record.line, "0");
        assert_eq!(record.column, "0");
    }

    #[test]
    fn test_error_with_location() {
        let mut error = element("error", &[("severity", "error"), ("msg", "null pointer")]);
        error.children.push(element(
            "location",
            &[("file", "a.c"), ("line", "12"), ("column", "4")],
        ));

        let record = LogRecord::from_error_element(&error);
        assert_eq!(
            record,
            LogRecord {
                kind: "error".to_string(),
                message: "null pointer".to_string(),
                file: "a.c".to_string(),
                line: "12".to_string(),
                column: "4".to_string(),
            }
        );
    }

    #[test]
    fn test_location_missing_attributes() {
        let mut error = element("error", &[("severity", "style")]);
        error.children.push(element("location", &[("line", "7")]));

        let record = LogRecord::from_error_element(&error);
        assert_eq!(record.file, "[internal]");
        assert_eq!(record.line, "7");
        assert_eq!(record.column, "0");
    }

    #[test]
    fn test_non_location_first_child_ignores_later_location() {
        let mut error = element("error", &[("severity", "error")]);
        error.children.push(element("symbol", &[("file", "ignored.c")]));
        error.children.push(element(
            "location",
            &[("file", "b.c"), ("line", "3"), ("column", "1")],
        ));

        let record = LogRecord::from_error_element(&error);
        assert_eq!(record.file, "[internal]");
        assert_eq!(record.line, "0");
        assert_eq!(record.column, "0");
    }

    #[test]
    fn test_values_are_taken_verbatim() {
        let mut error = element("error", &[("severity", ""), ("msg", "")]);
        error.children.push(element(
            "location",
            &[("file", ""), ("line", "abc"), ("column", "-1")],
        ));

        let record = LogRecord::from_error_element(&error);
        assert_eq!(record.kind, "");
        assert_eq!(record.message, "");
        assert_eq!(record.file, "");
        assert_eq!(record.line, "abc");
        assert_eq!(record.column, "-1");
    }
}
