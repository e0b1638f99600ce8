//! Command line configuration

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::converter::ConverterConfig;
use crate::report::InputSource;

#[derive(Parser, Debug)]
#[command(
    name = "cppcheck_annotate",
    version,
    about = "Turns a cppcheck XML report into GitHub Actions annotations.",
    long_about = "Reads a cppcheck XML report (`cppcheck --xml`) and prints one \
                  `::<severity> file=...,line=...,col=...::<message>` line per finding. \
                  Exits with 1 when any finding was printed, 0 when there were none."
)]
pub struct Cli {
    /// Report file to read, `-` for standard input
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value_t = LevelFilter::Warn,
        help = "Diagnostic log level: off, error, warn, info, debug or trace."
    )]
    pub log_level: LevelFilter,

    #[arg(
        long = "log-file",
        value_name = "PATH",
        help = "Write diagnostic logs to this file instead of standard error."
    )]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn converter_config(&self) -> ConverterConfig {
        ConverterConfig {
            input: InputSource::from_arg(self.input.clone()),
        }
    }
}
