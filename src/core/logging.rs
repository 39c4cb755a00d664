//! Logging setup.
//!
//! Human or JSONL logs on stderr, filtered through tracing-subscriber.

use tracing_subscriber::EnvFilter;

const LOG_LEVEL_ENV: &str = "BARB_LOG";
const LOG_FORMAT_ENV: &str = "BARB_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable logs.
    #[default]
    Human,
    /// JSON logs (one event per line).
    Json,
}

impl LogFormat {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Log level from CLI argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    #[default]
    Error,
}

impl LogLevel {
    /// Parse from CLI argument.
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "verbose" | "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Convert to tracing filter string.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Parse log level from the `BARB_LOG` env var.
#[must_use]
pub fn parse_log_level_from_env() -> Option<LogLevel> {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| LogLevel::from_arg(value.trim()))
}

/// Parse log format from the `BARB_LOG_FORMAT` env var.
#[must_use]
pub fn parse_log_format_from_env() -> Option<LogFormat> {
    std::env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|value| LogFormat::from_arg(value.trim()))
}

/// Install the global subscriber writing to stderr.
///
/// Later calls are no-ops; the subscriber can only be set once per process.
pub fn init(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::new(level.as_filter());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
        LogFormat::Human => {
            let _ = builder.try_init();
        }
    }
}
