//! Console Logger
//!
//! A `log` backend for the browser: every record goes to the devtools console
//! and the most recent lines are kept in a circular buffer, so diagnostics can
//! be read back after the fact (e.g. from a debugging hook on the page).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Bounded history of formatted log lines (oldest evicted first)
#[derive(Debug)]
pub struct History {
    lines: VecDeque<String>,
    capacity: usize,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Logger writing to `console.*` and into a [`History`]
pub struct ConsoleLogger {
    level: LevelFilter,
    history: Mutex<History>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            history: Mutex::new(History::with_capacity(capacity)),
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.history.lock() {
            Ok(history) => history.lines(),
            Err(poisoned) => poisoned.into_inner().lines(),
        }
    }

    fn remember(&self, line: String) {
        match self.history.lock() {
            Ok(mut history) => history.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// `12:00:00.000 ERROR policy_form_ui::dropdown: message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{timestamp} {level:<5} {target}: {message}")
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

// Host builds (unit tests) have no console object.
#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the global logger. Calling it again keeps the first logger.
pub fn init(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Lines retained by the global logger, empty before [`init`]
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}
