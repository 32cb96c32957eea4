//! `log` facade wiring for the match driver.

use std::env;
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Metadata, Record};

/// Stamps each record with the time elapsed since the driver started,
/// so move narration reads as a match timeline. Records go to stderr;
/// stdout stays clean for the JSON summary and board dumps.
struct MatchLogger;

static LOGGER: MatchLogger = MatchLogger;
static STARTED: OnceLock<Instant> = OnceLock::new();

impl log::Log for MatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed_ms = STARTED
            .get()
            .map(|start| start.elapsed().as_millis())
            .unwrap_or(0);
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "[{:>6}ms {:5}] {}",
            elapsed_ms,
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the match logger, taking the level from the `BROADSIDE_LOG`
/// environment variable. Defaults to `info` when unset or unparsable.
pub fn init_logging() {
    let level = env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(LevelFilter::Info);
    STARTED.get_or_init(Instant::now);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
