//! Error types for the report converter
//!
//! Every failure in here is fatal for the invocation: a malformed report means
//! the upstream analysis step is broken, so nothing is retried or recovered.
//! Missing attributes and an interrupted read are not errors at all and never
//! show up as a variant.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Main error type for report conversion
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO errors (reading the report, writing annotations)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// XML syntax errors, including mismatched end tags
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute syntax inside a start tag
    #[error("XML attribute error: {0}")]
    Attribute(#[from] AttrError),

    /// Tag or attribute bytes that are not valid UTF-8
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The input ended before any element was opened
    #[error("Report has no root element")]
    MissingRoot,

    /// The input ended while elements were still open
    #[error("Report ended inside unclosed element <{tag}>")]
    UnclosedElement { tag: String },

    /// Text or a second element after (or before) the root element
    #[error("Unexpected content outside the root element: {content}")]
    TrailingContent { content: String },

    /// The root element has fewer than two child elements
    #[error("Root element <{root}> has {found} child element(s), expected an error container at index 1")]
    MissingErrorContainer { root: String, found: usize },
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl ReportError {
    /// True for every variant that describes a broken report rather than a broken environment
    pub fn is_malformed_report(&self) -> bool {
        !matches!(self, ReportError::Io { .. })
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> ReportResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> ReportResult<T> {
        self.map_err(|e| ReportError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}
