//! cppcheck_annotate Library
//!
//! Converts a cppcheck XML report into GitHub Actions annotation lines,
//! one per finding, and computes the exit status a CI gate should use.

pub mod annotation;
pub mod cli;
pub mod converter;
pub mod error;
pub mod logging;
pub mod report;
pub mod status;

pub use annotation::{format_annotation, AnnotationEmitter, Emission};
pub use converter::{convert_text, exit_code, run, ConverterConfig, Summary};
pub use error::{ReportError, ReportResult};
pub use report::{parse_report, read_report, InputSource, LogRecord, Report, XmlElement};
pub use status::ExitStatus;
