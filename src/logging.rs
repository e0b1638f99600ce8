use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

/// Logger writing timestamped lines to standard error or a file.
/// Standard output is reserved for annotation lines and never used here.
struct DiagnosticLogger {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl DiagnosticLogger {
    fn new(level: LevelFilter, log_file: Option<PathBuf>) -> io::Result<Self> {
        let sink: Box<dyn Write + Send> = match log_file {
            Some(file_path) => Box::new(open_log_file(file_path)?),
            None => Box::new(io::stderr()),
        };

        Ok(DiagnosticLogger {
            level,
            sink: Mutex::new(sink),
        })
    }
}

fn open_log_file(file_path: PathBuf) -> io::Result<fs::File> {
    // Create parent directories if they don't exist
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)
}

fn format_line(record: &Record) -> String {
    format!(
        "[{}] [{}] {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

impl Log for DiagnosticLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut sink) = self.sink.lock() {
                let _ = writeln!(sink, "{}", format_line(record));
                let _ = sink.flush();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

/// Initialize the logger, writing to `log_file` (overwriting previous logs) or to standard error
pub fn init_logger(
    level: LevelFilter,
    log_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let logger = DiagnosticLogger::new(level, log_file)?;

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level))?;

    Ok(())
}
