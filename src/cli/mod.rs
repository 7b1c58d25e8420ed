// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modpacker [global options] [ACTION...]
//!   local         copy build output into the r2modman profile
//!   thunderstore  write release/Thunderstore/<name>.zip
//!   (none)        local, then thunderstore
//! ```

pub mod actions;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::actions::{Action, Actions};
use crate::cli::global::GlobalOptions;
use clap::Parser;

/// BepInEx mod packer
///
/// Deploys a mod's build output locally and packages it for Thunderstore.
#[derive(Debug, Parser)]
#[command(
    name = "modpacker",
    author,
    version,
    about = "BepInEx mod deployment and Thunderstore packaging",
    long_about = "modpacker Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Finds the mod project containing the current directory (a folder\n\
                  with plugin/ or patcher/ and a manifest.json), then copies the\n\
                  built artifacts into the r2modman profile and/or writes a\n\
                  Thunderstore package to release/Thunderstore/<name>.zip.",
    after_help = "CONFIG FILES:\n\n\
                  modpacker reads modpacker.toml from the project root if present.\n\
                  Additional files can be given with --config. Environment variables\n\
                  of the form MODPACKER_<SECTION>__<KEY> override both, and CLI flags\n\
                  override everything."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Actions to run, in any order. Defaults to all of them.
    #[arg(value_enum, value_name = "ACTION")]
    pub actions: Vec<Action>,
}

impl Cli {
    /// Requested actions; none means all.
    #[must_use]
    pub fn requested_actions(&self) -> Actions {
        Actions::from_requested(&self.actions)
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
