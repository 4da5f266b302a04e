// src/logging.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Appends `[elapsed][LEVEL] msg` lines to a single file.
/// Write failures are swallowed; logging never aborts a run.
pub struct FileLogger {
    path: PathBuf,
    lock: Mutex<()>,
    level: LevelFilter,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self { path: path.into(), lock: Mutex::new(()), level }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) { return; }

        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
            {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger as the global `log` sink.
/// Creates the parent directory if needed. Only the first call wins.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), SetLoggerError> {
    start();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    let logger = LOGGER.get_or_init(|| FileLogger::new(path, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
