//! Stderr logger shared by the `tally` crates.
//!
//! Records from the workspace's own crates (`tally_*` targets) honour
//! `TALLY_LOG_LEVEL`; records from dependencies are never shown below `warn`,
//! so `TALLY_LOG_LEVEL=debug` shows the `[walk]`/`[pool]`/`[scan]` trail
//! without third-party noise.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME};

/// Level used when `TALLY_LOG_LEVEL` is unset or unparsable.
const DEFAULT_LEVEL: Level = Level::Warn;

/// Most verbose level ever shown for records from other crates.
const DEPENDENCY_LEVEL: Level = Level::Warn;

pub struct Logger {
    level: Level,
}

impl Logger {
    pub fn new(level: Level) -> Self {
        Logger { level }
    }

    fn threshold(&self, target: &str) -> Level {
        if component(target).is_some() {
            self.level
        } else {
            self.level.min(DEPENDENCY_LEVEL)
        }
    }

    /// `<timestamp> <LEVEL> <component> <message>`, where the component is
    /// `fs` for `tally_fs::walker` and the full target for other crates.
    fn render(&self, record: &Record<'_>) -> String {
        let origin = component(record.target()).unwrap_or(record.target());
        format!(
            "{} {:<5} {origin} {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.threshold(metadata.target())
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.render(record));
        }
    }

    fn flush(&self) {}
}

/// Short component name for a workspace target: `tally_fs::pool` → `fs`,
/// the `tally` binary → `tally`. `None` for any other crate.
fn component(target: &str) -> Option<&str> {
    let krate = target.split("::").next().unwrap_or(target);
    if krate == PROGRAM_NAME {
        return Some(krate);
    }
    krate
        .strip_prefix(PROGRAM_NAME)
        .and_then(|rest| rest.strip_prefix('_'))
        .filter(|name| !name.is_empty())
}

/// `off` and unknown names fall back to the default: warnings always show.
fn parse_level(raw: &str) -> Option<Level> {
    raw.trim()
        .parse::<LevelFilter>()
        .ok()
        .and_then(|filter| filter.to_level())
}

fn level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the global logger at the level named by `TALLY_LOG_LEVEL`.
///
/// Fails if a logger is already installed.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger::new(level)))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
