// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE      ← Additional config files (can repeat)
//! --project-dir DIR  ← Start of the project search (default: cwd)
//! --profile NAME     ← deploy.profile override
//! --dry              ← Simulate filesystem writes
//! --log-level N      ← Console verbosity (0-6)
//! --file-log-level   ← File verbosity (overrides --log-level)
//!
//! Precedence: CLI flags > env > --config > modpacker.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Directory to start the project search from, instead of the current one.
    #[arg(short = 'C', long = "project-dir", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// r2modman profile to deploy into.
    #[arg(long = "profile", value_name = "NAME")]
    pub profile: Option<String>,

    /// Logs what would be copied and packaged without writing anything.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6))]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6))]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// A single configuration override derived from a CLI flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOverride {
    Bool(&'static str, bool),
    Text(&'static str, String),
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<ConfigOverride> {
        let mut overrides = Vec::new();

        if self.dry {
            overrides.push(ConfigOverride::Bool("global.dry", true));
        }

        if let Some(ref profile) = self.profile {
            overrides.push(ConfigOverride::Text("deploy.profile", profile.clone()));
        }

        overrides
    }
}
