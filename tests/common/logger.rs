//! Test logging infrastructure for structured test output and debugging.
#![allow(dead_code)]
//!
//! Provides a `TestLogger` with per-test duration tracking and phase
//! tracking (setup, execute, verify). Output goes to stderr so it interleaves
//! with the default libtest capture.
//!
//! # Environment Variables
//!
//! - `TEST_LOG_LEVEL` - Set log level: debug, info, warn, error (default: info)

use std::cell::RefCell;
use std::env;
use std::fmt::Display;
use std::time::Instant;

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse from string, case-insensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" | "trace" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            _ => None,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        write!(f, "{s}")
    }
}

fn min_level() -> LogLevel {
    env::var("TEST_LOG_LEVEL")
        .ok()
        .and_then(|s| LogLevel::parse(&s))
        .unwrap_or(LogLevel::Info)
}

/// Per-test structured logger.
pub struct TestLogger {
    test_name: String,
    started: Instant,
    phase: RefCell<Option<String>>,
}

impl TestLogger {
    /// Create a logger for the named test.
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        let logger = Self {
            test_name: test_name.to_string(),
            started: Instant::now(),
            phase: RefCell::new(None),
        };
        logger.log(LogLevel::Info, "START");
        logger
    }

    /// Mark the current phase (setup, execute, verify, ...).
    pub fn phase(&self, name: &str) {
        *self.phase.borrow_mut() = Some(name.to_string());
        self.log(LogLevel::Debug, &format!("phase: {name}"));
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log an outgoing request for debugging.
    pub fn http_request(&self, method: &str, url: &str) {
        self.log(LogLevel::Debug, &format!("{method} {url}"));
    }

    /// Mark the test finished successfully.
    pub fn finish_ok(&self) {
        let elapsed = self.started.elapsed().as_millis();
        self.log(LogLevel::Info, &format!("PASS ({elapsed}ms)"));
    }

    /// Mark the test finished with a failure reason.
    pub fn finish_err(&self, reason: &str) {
        let elapsed = self.started.elapsed().as_millis();
        self.log(LogLevel::Error, &format!("FAIL ({elapsed}ms): {reason}"));
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < min_level() {
            return;
        }
        match self.phase.borrow().as_deref() {
            Some(phase) => eprintln!("[{level}] {} [{phase}] {message}", self.test_name),
            None => eprintln!("[{level}] {} {message}", self.test_name),
        }
    }
}
