//! Diagnostics for the binaries.
//!
//! The game transcript owns stdout and is often piped, so records go to
//! stderr and stay quiet below `warn` unless `BATTLESHIP_LOG` asks for more.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

const LEVEL_VAR: &str = "BATTLESHIP_LOG";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{:<5} {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value` (e.g. `debug`, `off`), or `warn` when absent or unknown.
fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Route `log` records to stderr at the level set in `BATTLESHIP_LOG`.
///
/// Only the first call installs the logger.
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(parse_level(env::var(LEVEL_VAR).ok().as_deref()));
    }
}
