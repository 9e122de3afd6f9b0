//! Test logging infrastructure for structured test output and debugging.
#![allow(dead_code)]
//!
//! Provides a `TestLogger` for structured logging during tests with support
//! for console and file output, log levels via the `TEST_LOG_LEVEL` env
//! var, JSON output mode for CI parsing, and per-test duration tracking.
//!
//! # Environment Variables
//!
//! - `TEST_LOG_LEVEL` - Set log level: trace, debug, info, warn, error (default: info)
//! - `TEST_LOG_FILE` - Output file path (default: test-results.log)
//! - `TEST_LOG_JSON` - Set to "1" or "true" for JSON output format
//! - `NO_COLOR` - Disable colored output when set

use std::env;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

// =============================================================================
// Log Levels
// =============================================================================

/// Log severity levels matching standard conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse from string, case-insensitive.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            _ => None,
        }
    }

    /// Get ANSI color code for this level.
    #[must_use]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Self::Trace => "\x1b[90m", // Gray
            Self::Debug => "\x1b[36m", // Cyan
            Self::Info => "\x1b[32m",  // Green
            Self::Warn => "\x1b[33m",  // Yellow
            Self::Error => "\x1b[31m", // Red
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        write!(f, "{s}")
    }
}

// =============================================================================
// JSON Log Entry
// =============================================================================

/// Structured log entry for JSON output mode.
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub test: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

// =============================================================================
// Global State
// =============================================================================

static INITIALIZED: AtomicBool = AtomicBool::new(false);
static LOG_FILE: OnceLock<Mutex<Option<File>>> = OnceLock::new();
static MIN_LEVEL: OnceLock<LogLevel> = OnceLock::new();
static JSON_MODE: OnceLock<bool> = OnceLock::new();
static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// Initialize test logging infrastructure.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_test_logging() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let level = env::var("TEST_LOG_LEVEL")
        .ok()
        .and_then(|s| LogLevel::from_str(&s))
        .unwrap_or(LogLevel::Info);
    let _ = MIN_LEVEL.set(level);

    let json = env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1" || v.to_lowercase() == "true");
    let _ = JSON_MODE.set(json);

    let no_color = env::var("NO_COLOR").is_ok();
    let _ = NO_COLOR.set(no_color);

    let log_path =
        env::var("TEST_LOG_FILE").map_or_else(|_| PathBuf::from("test-results.log"), PathBuf::from);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    let _ = LOG_FILE.set(Mutex::new(file));
}

fn ensure_init() {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init_test_logging();
    }
}

fn get_min_level() -> LogLevel {
    *MIN_LEVEL.get().unwrap_or(&LogLevel::Info)
}

fn is_json_mode() -> bool {
    *JSON_MODE.get().unwrap_or(&false)
}

fn use_color() -> bool {
    !NO_COLOR.get().unwrap_or(&false)
}

fn write_to_file(content: &str) {
    if let Some(file_mutex) = LOG_FILE.get()
        && let Ok(mut guard) = file_mutex.lock()
        && let Some(ref mut file) = *guard
    {
        let _ = writeln!(file, "{content}");
    }
}

// =============================================================================
// TestLogger
// =============================================================================

/// Per-test logger with structured output and duration tracking.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
    current_phase: Mutex<String>,
}

impl TestLogger {
    /// Create a new test logger.
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        ensure_init();

        let logger = Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
            current_phase: Mutex::new("init".to_string()),
        };

        logger.log(LogLevel::Info, "Test starting");
        logger
    }

    /// Set the current test phase.
    ///
    /// Common phases: "setup", "execute", "verify"
    pub fn phase(&self, phase: &str) {
        if let Ok(mut current) = self.current_phase.lock() {
            *current = phase.to_string();
        }
        self.log(LogLevel::Debug, &format!("Phase: {phase}"));
    }

    /// Log a debug message.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log an info message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a warning message.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log an HTTP request (for HTTP tests).
    pub fn http_request(&self, method: &str, url: &str) {
        self.debug(&format!("HTTP {method} {url}"));
    }

    /// Mark test as passed with duration.
    pub fn finish_ok(&self) {
        let duration_ms = self.start_time.elapsed().as_millis() as u64;
        self.log_with_duration(
            LogLevel::Info,
            &format!("Test passed (duration: {duration_ms}ms)"),
            duration_ms,
        );
    }

    /// Mark test as failed with reason.
    pub fn finish_err(&self, reason: &str) {
        let duration_ms = self.start_time.elapsed().as_millis() as u64;
        self.log_with_duration(
            LogLevel::Error,
            &format!("Test FAILED: {reason} (duration: {duration_ms}ms)"),
            duration_ms,
        );
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < get_min_level() {
            return;
        }
        if is_json_mode() {
            self.log_json(level, message, None);
        } else {
            self.log_text(level, message, Utc::now());
        }
    }

    fn log_with_duration(&self, level: LogLevel, message: &str, duration_ms: u64) {
        if level < get_min_level() {
            return;
        }
        if is_json_mode() {
            self.log_json(level, message, Some(duration_ms));
        } else {
            self.log_text(level, message, Utc::now());
        }
    }

    fn log_json(&self, level: LogLevel, message: &str, duration_ms: Option<u64>) {
        let phase = self.current_phase.lock().ok().map(|p| p.clone());
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            test: self.test_name.clone(),
            message: message.to_string(),
            phase,
            duration_ms,
        };

        if let Ok(json) = serde_json::to_string(&entry) {
            eprintln!("{json}");
            write_to_file(&json);
        }
    }

    fn log_text(&self, level: LogLevel, message: &str, timestamp: DateTime<Utc>) {
        let ts = timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ");

        let line = if use_color() {
            let reset = "\x1b[0m";
            let color = level.color_code();
            format!(
                "[{ts}] [{color}{level}{reset}] [{}] {message}",
                self.test_name
            )
        } else {
            format!("[{ts}] [{level}] [{}] {message}", self.test_name)
        };

        eprintln!("{line}");
        write_to_file(&strip_ansi(&line));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Strip ANSI escape codes from a string.
fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_escape = false;

    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            result.push(c);
        }
    }

    result
}
