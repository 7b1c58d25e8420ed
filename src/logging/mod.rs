// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging setup on top of `tracing`.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! stderr    log file (optional, non_blocking)
//! level or  file level
//! MODPACKER_LOG
//!        |
//!        v
//!    LogGuard (flushes the file writer on drop)
//!
//! -l:  0=off  1=error  2=warn  3=info  4=debug  5=trace  6=dump
//! ```
//!
//! `dump` filters like `trace` but also prints event targets on the console.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ConfigError, Result};

/// Environment variable with `EnvFilter` directives that replace the console
/// level, e.g. `MODPACKER_LOG=modpacker::deploy=trace`.
pub const LOG_ENV_VAR: &str = "MODPACKER_LOG";

/// Verbosity on the 0-6 scale used by `--log-level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    /// Progress messages: copied files, written package.
    #[default]
    Info = 3,
    /// Resolved paths, config sources, skipped candidates.
    Debug = 4,
    Trace = 5,
    Dump = 6,
}

impl LogLevel {
    /// Every level, in ascending verbosity.
    pub const ALL: [Self; 7] = [
        Self::Silent,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
        Self::Dump,
    ];

    /// Converts a 0-6 value; `None` when out of range.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Silent),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            6 => Some(Self::Dump),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Silent => LevelFilter::OFF,
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace | Self::Dump => LevelFilter::TRACE,
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(value).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {value}"),
        })
    }
}

/// Logging options collected from the command line.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file), into)]
    log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Console lines carry the event target only at [`LogLevel::Dump`].
    #[must_use]
    pub fn show_target(&self) -> bool {
        self.console_level == LogLevel::Dump
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Console filter: directives from [`LOG_ENV_VAR`] when set, else `level`.
#[must_use]
pub fn console_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.level_filter().into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    File::create(path).with_context(|| format!("failed to create log file {}", path.display()))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
///
/// # Example
///
/// ```no_run
/// use modpacker::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::Debug)
///     .with_log_file("modpacker.log")
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("Logging initialized");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_ansi(true)
        .without_time()
        .with_filter(console_filter(config.console_level()));

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(config.file_level().level_filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a logging subscriber is already installed")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
