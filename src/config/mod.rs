// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <project root>/modpacker.toml
//! 3. --config FILE
//! 4. MODPACKER_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODPACKER_GLOBAL__DRY=true          → global.dry = true
//! MODPACKER_DEPLOY__PROFILE=Testing   → deploy.profile = "Testing"
//! MODPACKER_DEPLOY__MOD_MANAGER=X     → deploy.mod_manager = "X"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

use loader::ConfigLoader;
use types::{DeployConfig, GlobalConfig};

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "modpacker.toml";

/// Prefix of `<PREFIX>_<SECTION>__<KEY>` configuration variables.
pub const ENV_PREFIX: &str = "MODPACKER";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Local deployment options.
    pub deploy: DeployConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modpacker::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modpacker.toml")
    ///     .with_env_prefix(modpacker::config::ENV_PREFIX)
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a deploy folder name is empty or not a single
    /// path component.
    pub fn validate(&self) -> Result<()> {
        self.deploy.validate()?;
        Ok(())
    }

    /// Format configuration options for display, ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("global.dry", self.global.dry.to_string());
        options.insert("deploy.mod_manager", self.deploy.mod_manager.clone());
        options.insert("deploy.game", self.deploy.game.clone());
        options.insert("deploy.profile", self.deploy.profile.clone());
        options.insert("deploy.loader_dir", self.deploy.loader_dir.clone());
        if let Some(dir) = &self.deploy.profiles_dir {
            options.insert("deploy.profiles_dir", dir.display().to_string());
        }

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
