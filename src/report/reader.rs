//! Report input
//!
//! The report arrives on standard input (piped from the analyzer) or from a
//! file. Reading runs until end of stream or until the caller's cancellation
//! future resolves, whichever comes first. Cancellation is not an error: the
//! text collected so far is returned as is.

use std::future::Future;
use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};

use crate::error::{IoContext, ReportResult};

/// Where the report text comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean standard input
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Boxed input stream handed to [`read_report`]
pub type ReportInput = Box<dyn AsyncRead + Unpin + Send>;

/// Opens the configured input
pub async fn open_input(source: &InputSource) -> ReportResult<ReportInput> {
    match source {
        InputSource::Stdin => Ok(Box::new(tokio::io::stdin())),
        InputSource::File(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_io_context(&format!("Failed to open report {}", path.display()))?;
            Ok(Box::new(file))
        }
    }
}

/// Reads the whole report into one string, line terminators included.
///
/// When `cancel` resolves before the end of the stream, standard output is
/// flushed and whatever has been collected is returned.
pub async fn read_report<R, C>(input: R, cancel: C) -> ReportResult<String>
where
    R: AsyncRead + Unpin,
    C: Future<Output = ()>,
{
    let mut reader = BufReader::new(input);
    let mut text = String::new();
    let mut line = String::new();
    tokio::pin!(cancel);

    loop {
        line.clear();
        tokio::select! {
            biased;
            _ = &mut cancel => {
                log::info!("Report read interrupted after {} bytes", text.len());
                tokio::io::stdout()
                    .flush()
                    .await
                    .with_io_context("Failed to flush standard output")?;
                break;
            }
            read = reader.read_line(&mut line) => {
                let count = read.with_io_context("Failed to read report")?;
                if count == 0 {
                    break;
                }
                text.push_str(&line);
            }
        }
    }

    log::debug!("Read {} bytes of report text", text.len());
    Ok(text)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
