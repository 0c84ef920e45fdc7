//! LogState - Gallery Console Lines in a Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::theme::colors::GalleryColors;

/// Console line level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x22c55eff), // Green
            LogLevel::Warn => gpui::rgba(0xf59e0bff), // Amber
            LogLevel::Debug => GalleryColors::text_muted(),
        }
    }
}

/// A single console line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Console lines, oldest dropped first once full
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogState {
    /// Create a console holding at most `capacity` lines
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    pub fn push(
        &mut self,
        level: LogLevel,
        message: impl Into<String>,
        timestamp: DateTime<Local>,
    ) {
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

}

impl Default for LogState {
    fn default() -> Self {
        Self::new(crate::constants::CONSOLE_LOG_CAPACITY)
    }
}
