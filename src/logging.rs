#![cfg(feature = "std")]

//! Stderr logger for the replay binary. Stdout is reserved for JSON results.

use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::io::{self, Write};

const LEVEL_VAR: &str = "FLEET_LOG";

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
        let _ = writeln!(
            err,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Route `log` records to stderr at the level named by `FLEET_LOG`
/// (`info` when unset or unparsable) and return that level.
///
/// Only the first call installs the logger; later calls just adjust the level.
pub fn init_logging() -> LevelFilter {
    let level = level_from(env::var(LEVEL_VAR).ok().as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
    level
}
