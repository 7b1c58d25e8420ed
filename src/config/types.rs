// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, DeployConfig
//!
//! DeployConfig resolves to:
//!   <profiles_dir>/<profile>/<loader_dir>
//! where profiles_dir defaults to
//!   %APPDATA%/<mod_manager>/<game>/profiles
//!   %LOCALAPPDATA%/<mod_manager>/<game>/profiles
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Simulate filesystem writes without making changes.
    pub dry: bool,
}

/// Local deployment settings (r2modman profile layout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Mod manager data folder name under the application data directory.
    pub mod_manager: String,
    /// Game folder name inside the mod manager data folder.
    pub game: String,
    /// Profile to deploy into.
    pub profile: String,
    /// Mod loader folder inside the profile.
    pub loader_dir: String,
    /// Explicit profiles directory; disables the environment search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles_dir: Option<PathBuf>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            mod_manager: "r2modmanPlus-local".to_string(),
            game: "Outward".to_string(),
            profile: "Default".to_string(),
            loader_dir: "BepInEx".to_string(),
            profiles_dir: None,
        }
    }
}

impl DeployConfig {
    /// Checks that every folder name is a single, non-empty path component.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let names = [
            ("mod_manager", &self.mod_manager),
            ("game", &self.game),
            ("profile", &self.profile),
            ("loader_dir", &self.loader_dir),
        ];

        for (key, value) in names {
            let message = if value.trim().is_empty() {
                "must not be empty".to_string()
            } else if value.contains(['/', '\\']) || value == "." || value == ".." {
                format!("'{value}' must be a single folder name")
            } else {
                continue;
            };

            return Err(ConfigError::InvalidValue {
                section: "deploy".to_string(),
                key: key.to_string(),
                message,
            });
        }

        Ok(())
    }
}
