//! Custom logging module.
//!
//! This module provides a logger that captures log entries into a shared
//! buffer so they can be shown in the log panel of the UI.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for display.
const MAX_ENTRIES: usize = 200;

/// Log entries shared between the logger and the state.
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that appends formatted records to a `LogBuffer`.
///
pub struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl BufferLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        BufferLogger { buffer, level }
    }

    /// Install the logger as the global `log` backend.
    ///
    pub fn init(buffer: LogBuffer, level: LevelFilter) -> Result<(), AppError> {
        log::set_boxed_logger(Box::new(BufferLogger::new(buffer, level)))
            .map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A poisoned buffer only costs us log lines
        if let Ok(mut entries) = self.buffer.lock() {
            if entries.len() == MAX_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(format_log(record));
        }
    }

    fn flush(&self) {}
}
