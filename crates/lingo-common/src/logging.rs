//! Structured logging infrastructure for Lingo

use crate::error::{LingoError, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "lingo_i18n=trace")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Optional file path for log output; stderr otherwise
    pub file_path: Option<PathBuf>,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether to include thread ids
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_targets: true,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Logging preset for interactive debugging
    pub fn verbose() -> Self {
        Self {
            level: "debug".to_string(),
            include_thread_ids: true,
            ..Self::default()
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Fails if a global subscriber is already installed or the log file
/// location is unusable.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| LingoError::Logging(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match &config.file_path {
        Some(path) => {
            let appender = file_appender(path)?;
            if config.json_format {
                registry
                    .with(
                        fmt::layer()
                            .json()
                            .with_writer(appender)
                            .with_target(config.include_targets)
                            .with_thread_ids(config.include_thread_ids),
                    )
                    .try_init()
            } else {
                registry
                    .with(
                        fmt::layer()
                            .with_ansi(false)
                            .with_writer(appender)
                            .with_target(config.include_targets)
                            .with_thread_ids(config.include_thread_ids),
                    )
                    .try_init()
            }
        }
        None if config.json_format => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(config.include_targets)
                    .with_thread_ids(config.include_thread_ids),
            )
            .try_init(),
        None => registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(config.include_targets)
                    .with_thread_ids(config.include_thread_ids),
            )
            .try_init(),
    };

    result.map_err(|e| LingoError::Logging(e.to_string()))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LingoError::config_field("log file path has no file name", "file_path"))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| LingoError::Logging(e.to_string()))
}
