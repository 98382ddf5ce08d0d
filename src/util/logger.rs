use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes log records to standard error as `[LEVEL] target: message`.
///
/// The level threshold is the global maximum set by [`init`].
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Maps the number of `-v` flags to a level filter.
///
/// # Example
/// ```
/// use log::LevelFilter;
/// use tally::util::logger::verbosity_filter;
///
/// assert_eq!(verbosity_filter(0), LevelFilter::Warn);
/// assert_eq!(verbosity_filter(1), LevelFilter::Debug);
/// assert_eq!(verbosity_filter(5), LevelFilter::Trace);
/// ```
#[must_use]
pub const fn verbosity_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs [`StderrLogger`] as the global logger.
///
/// # Errors
/// Fails if a logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
