// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          ModpackError (~24 bytes)
//!                  |
//!   +-------+------+-----+------+----+----+
//!   |       |      |     |      |    |    |
//!   v       v      v     v      v    v    v
//! Bail  Project Manifest Deploy Cfg  Fs   Io
//! Box<str> Box    Box    Box    Box  Box  Box
//!
//! Sub-errors (unboxed internally):
//!   Project  NotFound, NoProjectFile, MultipleProjectFiles
//!   Manifest Read, Parse, NotAnObject, MissingKey, InvalidValue
//!   Deploy   LoaderDirNotFound
//!   Config   InvalidValue
//!   Fs       NotFound, IoError
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModpackError`].
pub type ModpackResult<T> = std::result::Result<T, ModpackError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ModpackError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Project discovery or layout error.
    #[error("project error: {0}")]
    Project(#[from] Box<ProjectError>),

    /// Manifest loading or lookup error.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Local deployment error.
    #[error("deploy error: {0}")]
    Deploy(#[from] Box<DeployError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`ModpackError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> ModpackError {
    ModpackError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModpackError {
                fn from(err: $error) -> Self {
                    ModpackError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProjectError => Project,
    ManifestError => Manifest,
    DeployError => Deploy,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Project Errors ---

/// Project discovery and layout errors.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// No valid project root between the start directory and the filesystem root.
    #[error("Failed to find a mod project at '{start}' or any of its parent folders")]
    NotFound { start: String },

    /// Component directory has no `.csproj` file.
    #[error("No csproj file in '{dir}'")]
    NoProjectFile { dir: String },

    /// Component directory has more than one `.csproj` file.
    #[error("Multiple csproj files in '{dir}' (found {count})")]
    MultipleProjectFiles { dir: String, count: usize },
}

// --- Manifest Errors ---

/// Manifest loading and lookup errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read the manifest file.
    #[error("failed to read manifest '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid JSON.
    #[error("failed to parse manifest '{path}': {message}")]
    Parse { path: String, message: String },

    /// Manifest top-level value is not a JSON object.
    #[error("manifest '{path}' must contain a JSON object")]
    NotAnObject { path: String },

    /// Required key is absent.
    #[error("missing required key '{key}' in manifest '{path}'")]
    MissingKey { path: String, key: String },

    /// Key is present but has the wrong type.
    #[error("invalid value for '{key}' in manifest '{path}': expected {expected}")]
    InvalidValue {
        path: String,
        key: String,
        expected: &'static str,
    },
}

// --- Deploy Errors ---

/// Local deployment errors.
#[derive(Debug, Error)]
pub enum DeployError {
    /// No r2modman profile with a loader directory was found.
    #[error("Failed to find the BepInEx folder (searched: {searched})")]
    LoaderDirNotFound { searched: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.display().to_string());
        }
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
