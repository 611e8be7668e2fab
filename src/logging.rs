//! Stderr logger for the tint binary.
//!
//! Library code reports through the `log` facade (e.g. the hex decoder's
//! white fallback). The binary installs this logger so those records are
//! printed as Cargo-style status lines.

use log::{Level, LevelFilter, Metadata, Record};

use crate::output::Printer;

struct StderrLogger {
    printer: Printer,
    level: LevelFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with("tint")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            Level::Error => self.printer.error("error", &message),
            Level::Warn => self.printer.warning("warning", &message),
            Level::Info => self.printer.info("info", &message),
            Level::Debug | Level::Trace => self.printer.info("debug", &message),
        }
    }

    fn flush(&self) {}
}

/// Map the `-v` count to a level filter.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Later calls are ignored.
pub fn init(printer: Printer, verbose: u8) {
    let level = level_for(verbose);
    let logger = StderrLogger { printer, level };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}
