use std::env;
use std::io::Write;

use log::{self, LevelFilter, Metadata, Record};

/// Stderr logger. Stdout belongs to the protocol.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV_VAR: &str = "MLR_LOG";

/// Initialize logging with a level taken from the `MLR_LOG` environment variable.
/// Defaults to `warn` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
