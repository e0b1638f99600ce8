//! GitHub Actions annotation output
//!
//! Each finding becomes one workflow command line:
//!
//! ```text
//! ::{kind} file={file},line={line},col={column}::{message}
//! ```
//!
//! Values are written exactly as they were reported, no escaping is applied.

use std::io::Write;

use crate::error::{IoContext, ReportResult};
use crate::report::LogRecord;

/// Outcome of handing one record to the emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// A line was written
    Emitted,
    /// The record had an empty kind and was dropped
    Skipped,
}

impl Emission {
    /// Status code contributed by this emission: 1 when a line was written, 0 otherwise
    pub fn code(self) -> i32 {
        match self {
            Emission::Emitted => 1,
            Emission::Skipped => 0,
        }
    }
}

/// Formats a record as an annotation line, without the line terminator.
/// Returns `None` for a record whose kind is empty.
pub fn format_annotation(record: &LogRecord) -> Option<String> {
    if record.kind.is_empty() {
        return None;
    }

    Some(format!(
        "::{} file={},line={},col={}::{}",
        record.kind, record.file, record.line, record.column, record.message
    ))
}

/// Writes annotation lines to an output stream, one line per record
pub struct AnnotationEmitter<W: Write> {
    out: W,
}

impl<W: Write> AnnotationEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the record's line and flushes it right away
    pub fn emit(&mut self, record: &LogRecord) -> ReportResult<Emission> {
        let Some(line) = format_annotation(record) else {
            log::debug!("Skipping finding with empty severity: {}", record.message);
            return Ok(Emission::Skipped);
        };

        writeln!(self.out, "{}", line).with_io_context("Failed to write annotation")?;
        self.out
            .flush()
            .with_io_context("Failed to flush annotation output")?;
        Ok(Emission::Emitted)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
