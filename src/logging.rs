use std::io::Write;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

// @module: Stderr logger for both binaries

// @struct: Colored, timestamped logger writing to stderr
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        StderrLogger { level }
    }

    /// Install as the global logger. Stdout stays reserved for subtitle output.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Filtering happens through log::max_level so it can change later
        log::set_boxed_logger(Box::new(StderrLogger::new(LevelFilter::Trace)))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Change the active level after the config has been loaded
    pub fn set_level(level: LevelFilter) {
        log::set_max_level(level);
    }

    // @returns: ANSI color and tag for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = chrono::Local::now().format("%H:%M:%S%.3f");
        let (color, tag) = Self::style_for_level(record.level());
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
