// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! ModContext::load(project, config)
//!        |
//!        v
//! run_actions(actions, &ctx)
//!   local        --> deploy::deploy()
//!   thunderstore --> package::build_package()
//! ```

pub mod local;
pub mod thunderstore;

#[cfg(test)]
mod tests;

use tracing::info;

use crate::cli::actions::{Action, Actions};
use crate::config::Config;
use crate::error::{ModpackResult, Result, bail_out};
use crate::project::{Manifest, Project};

/// Everything an action needs: the located project, its manifest and the
/// effective configuration.
#[derive(Debug, Clone)]
pub struct ModContext {
    project: Project,
    manifest: Manifest,
    config: Config,
}

impl ModContext {
    #[must_use]
    pub const fn new(project: Project, manifest: Manifest, config: Config) -> Self {
        Self {
            project,
            manifest,
            config,
        }
    }

    /// Loads the project's manifest and builds the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded, or if its `name`
    /// is present but unusable as a file name.
    pub fn load(project: Project, config: Config) -> ModpackResult<Self> {
        let manifest = project.load_manifest()?;

        if let Ok(name) = manifest.name()
            && (name.is_empty() || name.contains(['/', '\\']) || name == "." || name == "..")
        {
            return Err(bail_out(format!(
                "mod name '{name}' in {} cannot be used as a file name",
                manifest.path().display()
            )));
        }

        Ok(Self::new(project, manifest, config))
    }

    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    #[must_use]
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.config.global.dry
    }
}

/// Runs the selected actions in order: local, then thunderstore.
///
/// # Errors
///
/// Stops at and returns the first failing action's error.
pub fn run_actions(actions: Actions, ctx: &ModContext) -> Result<()> {
    info!("Executing actions: {}", actions.describe());

    for action in actions.ordered() {
        match action {
            Action::Local => local::run_local_command(ctx)?,
            Action::Thunderstore => thunderstore::run_thunderstore_command(ctx)?,
        }
    }

    info!("Done!");
    Ok(())
}
