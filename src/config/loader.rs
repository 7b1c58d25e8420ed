// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! defaults (serde)
//!   < modpacker.toml in the project root   add_toml_file_optional
//!   < each --config FILE                   add_toml_file
//!   < MODPACKER_<SECTION>__<KEY>           with_env_prefix
//!   < --dry / --profile                    set
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat, Map};

use super::Config;
use crate::cli::global::ConfigOverride;
use crate::error::Result;

/// One layer that went into a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// TOML file that must exist.
    File(PathBuf),
    /// TOML file that was present when added.
    OptionalFile(PathBuf),
    /// TOML text passed directly.
    Inline,
    /// Environment variables with this prefix.
    Environment(String),
    /// Single key set from the command line.
    Override(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::OptionalFile(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[inline] <string>"),
            Self::Environment(prefix) => write!(f, "[env] {prefix}_<SECTION>__<KEY>"),
            Self::Override(key) => write!(f, "[override] {key}"),
        }
    }
}

/// Builder that stacks configuration sources, later ones winning.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_vars: Option<Map<String, String>>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_vars: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file; `build()` fails if it is missing or malformed.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.is_file() {
            self.sources
                .push(ConfigSource::OptionalFile(path.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables during `build()`, e.g.
    /// `MODPACKER_DEPLOY__PROFILE=Testing`.
    ///
    /// Variables without a `__` section separator, such as `MODPACKER_LOG`,
    /// are left to other consumers.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.sources
            .push(ConfigSource::Environment(prefix.to_string()));
        self
    }

    /// Like [`with_env_prefix`](Self::with_env_prefix), reading from `vars`
    /// instead of the process environment.
    #[must_use]
    pub fn with_env_vars<I, K, V>(self, prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut loader = self.with_env_prefix(prefix);
        loader.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        loader
    }

    /// Sets `key` (dotted, e.g. `deploy.profile`) above every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key path is malformed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        self.sources.push(ConfigSource::Override(key.to_string()));
        Ok(self)
    }

    /// Applies command-line overrides in order.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub fn with_overrides(self, overrides: Vec<ConfigOverride>) -> Result<Self> {
        overrides
            .into_iter()
            .try_fold(self, |loader, over| match over {
                ConfigOverride::Bool(key, value) => loader.set(key, value),
                ConfigOverride::Text(key, value) => loader.set(key, value),
            })
    }

    /// Merges all sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, an unknown key is present, or a value fails validation.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = self.env_vars.clone().unwrap_or_else(|| {
                    std::env::vars_os()
                        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                        .collect()
                });
                self.builder.add_source(
                    Environment::with_prefix(prefix)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true)
                        .source(Some(config_vars(prefix, vars))),
                )
            }
            None => self.builder,
        };

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Sources in the order they were added (lowest priority first).
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Numbered, human-readable source list for debug output.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

/// Keeps only `<PREFIX>_<SECTION>__<KEY>` variables.
fn config_vars(prefix: &str, vars: Map<String, String>) -> Map<String, String> {
    let head = format!("{prefix}_");
    vars.into_iter()
        .filter(|(key, _)| {
            key.get(..head.len())
                .is_some_and(|p| p.eq_ignore_ascii_case(&head))
                && key[head.len()..].contains("__")
        })
        .collect()
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
