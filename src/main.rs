use std::process;

use clap::Parser;
use cppcheck_annotate::cli::Cli;
use cppcheck_annotate::converter::{self, FATAL_EXIT_CODE};
use cppcheck_annotate::logging;
use log::{debug, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout with exit code 0, usage errors to stderr
            let code = if e.use_stderr() { FATAL_EXIT_CODE } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = logging::init_logger(cli.log_level, cli.log_file.clone()) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(FATAL_EXIT_CODE);
    }

    info!("Command line arguments: {:?}", cli);

    let config = cli.converter_config();
    let result = converter::run(&config, interrupted()).await;
    if let Err(e) = &result {
        // stderr gets the full chain below; the log only keeps a record of it
        debug!("Conversion failed: {}", e);
        eprintln!("Error: {}", e);
        let mut source = std::error::Error::source(e);
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
    }

    log::logger().flush();
    process::exit(converter::exit_code(&result));
}

/// Resolves on Ctrl+C. Never resolves when the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
