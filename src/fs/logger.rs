//! Dual console and file logger.
//!
//! Every record is printed and appended to a log file (`log.txt` by default)
//! with the time since the program started:
//!
//! ```text
//! INFO [2m 5s 123ms] powercell::subsystems::flywheel - Flywheel target Some(4200) rpm
//! WARN [2m 5s 456ms] powercell::commands::drive - Drive Percent Output Error: ...
//! ```
//!
//! A missing or read-only filesystem only disables the file half.

use std::{
    fmt,
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Where [`init`] writes.
pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// Logs to the console and, when it could be opened, a file.
pub struct RobotLogger {
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl RobotLogger {
    /// Creates a logger writing to `path`, truncating it.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }

    /// Whether the log file was opened.
    pub fn has_file(&self) -> bool { self.file_writer.lock().is_ok_and(|writer| writer.is_some()) }
}

impl log::Log for RobotLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), uptime(), record.target(), record.args());
        print!("{}", line);

        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<RobotLogger> = OnceLock::new();

/// Installs the logger writing to [`DEFAULT_LOG_PATH`].
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_path(level, DEFAULT_LOG_PATH)
}

/// Installs the logger writing to `path`.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init_with_path(level: LevelFilter, path: impl AsRef<Path>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RobotLogger::new(path));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

fn format_line(level: Level, uptime: Duration, target: &str, args: &fmt::Arguments<'_>) -> String {
    // whole milliseconds keep the stamp short
    let uptime = Duration::from_millis(uptime.as_millis() as u64);
    format!("{} [{}] {} - {}\n", level, format_duration(uptime), target, args)
}

#[cfg(target_vendor = "vex")]
fn uptime() -> Duration { vexide::time::user_uptime() }

#[cfg(not(target_vendor = "vex"))]
fn uptime() -> Duration {
    static START: OnceLock<std::time::Instant> = OnceLock::new();
    START.get_or_init(std::time::Instant::now).elapsed()
}
