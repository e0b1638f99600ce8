//! Conversion pipeline
//!
//! Reads the report, parses it, then normalizes and emits every finding in
//! document order. The exit status is folded from the emission codes.

use std::future::Future;
use std::io::Write;

use crate::annotation::{AnnotationEmitter, Emission};
use crate::error::ReportResult;
use crate::report::{open_input, parse_report, read_report, InputSource, LogRecord};
use crate::status::ExitStatus;

/// Exit code for a report that could not be read or parsed
pub const FATAL_EXIT_CODE: i32 = 2;

/// Settings for one conversion run
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    pub input: InputSource,
}

/// What a conversion produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Findings written as annotation lines
    pub emitted: usize,
    /// Findings dropped because of an empty severity
    pub skipped: usize,
    pub status: ExitStatus,
}

impl Summary {
    fn record(self, emission: Emission) -> Self {
        let (emitted, skipped) = match emission {
            Emission::Emitted => (self.emitted + 1, self.skipped),
            Emission::Skipped => (self.emitted, self.skipped + 1),
        };
        Self {
            emitted,
            skipped,
            status: self.status.combine(emission.code()),
        }
    }
}

/// Converts report text into annotation lines written to `out`
pub fn convert_text<W: Write>(text: &str, out: W) -> ReportResult<Summary> {
    let report = parse_report(text)?;
    let mut emitter = AnnotationEmitter::new(out);

    report
        .errors()?
        .map(LogRecord::from_error_element)
        .try_fold(Summary::default(), |summary, record| {
            let emission = emitter.emit(&record)?;
            Ok(summary.record(emission))
        })
}

/// Process exit code for a finished run: the folded emission status on
/// success, [`FATAL_EXIT_CODE`] for any error
pub fn exit_code(result: &ReportResult<Summary>) -> i32 {
    match result {
        Ok(summary) => summary.status.code(),
        Err(_) => FATAL_EXIT_CODE,
    }
}

/// Runs one conversion: reads the configured input until end of stream (or
/// until `cancel` resolves) and writes annotations to standard output.
pub async fn run<C>(config: &ConverterConfig, cancel: C) -> ReportResult<Summary>
where
    C: Future<Output = ()>,
{
    log::info!("Reading report from {}", config.input);
    let input = open_input(&config.input).await?;
    let text = read_report(input, cancel).await?;

    let stdout = std::io::stdout();
    let summary = convert_text(&text, stdout.lock())?;
    log::info!(
        "Emitted {} annotation(s), skipped {}, exit status {}",
        summary.emitted,
        summary.skipped,
        summary.status.code()
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "converter_tests.rs"]
mod tests;
