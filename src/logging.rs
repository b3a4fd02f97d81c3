//! Tracing subscriber set-up.
//!
//! The interactive UI owns the terminal, so it only logs when a log file is
//! given. Non-interactive commands log to stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Where log output goes.
pub enum LogTarget<'a> {
    /// Discard everything.
    Disabled,
    Stderr,
    /// Append to a file.
    File(&'a Path),
}

/// Maps `-v`/`-q` flags to a level. Default is INFO.
pub fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Opens (creating if needed) a log file in append mode.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber. `RUST_LOG` directives are honoured in
/// addition to the crate-level default.
pub fn init_logging(verbose: u8, quiet: bool, target: LogTarget<'_>) -> io::Result<()> {
    let level = log_level(verbose, quiet);
    let directive: Directive = format!("jobscope={}", level)
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(io::stderr)
                .init();
        }
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}
