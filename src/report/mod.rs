//! Report module
//!
//! Everything that turns the analyzer's XML report into [`LogRecord`]s:
//! reading the raw text, parsing it, and normalizing each finding.

pub mod parser;
pub mod reader;
pub mod record;

pub use parser::{parse_report, Report, XmlElement};
pub use reader::{open_input, read_report, InputSource};
pub use record::LogRecord;
