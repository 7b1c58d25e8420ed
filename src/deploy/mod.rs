// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local deployment into an r2modman profile.
//!
//! ```text
//! profiles dir (first existing):
//!   deploy.profiles_dir                         (if configured)
//!   %APPDATA%/<mod_manager>/<game>/profiles
//!   %LOCALAPPDATA%/<mod_manager>/<game>/profiles
//!        |
//!        v
//! <profiles>/<profile>/<loader_dir>/
//!   plugins/<author>-<name>/   <-- plugin artifacts
//!   patchers/<author>-<name>/  <-- patcher artifacts
//! ```


use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::cmd::ModContext;
use crate::config::types::DeployConfig;
use crate::error::{DeployError, Result};
use crate::project::ComponentKind;
use crate::utility::fs::{copy_into_dir, ensure_dir};

/// Application data variables searched for the mod manager folder, in order.
pub const APP_DATA_VARS: [&str; 2] = ["APPDATA", "LOCALAPPDATA"];

const PROFILES_DIR: &str = "profiles";

/// Files copied for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedComponent {
    pub kind: ComponentKind,
    pub target_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Outcome of a local deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub loader_dir: PathBuf,
    pub components: Vec<DeployedComponent>,
}

impl DeployReport {
    /// Total number of files copied (or that would be copied in dry-run).
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.components.iter().map(|c| c.files.len()).sum()
    }
}

/// Candidate profiles directories, in search order.
#[must_use]
pub fn profiles_dir_candidates<F>(config: &DeployConfig, env: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = &config.profiles_dir {
        return vec![dir.clone()];
    }

    APP_DATA_VARS
        .iter()
        .filter_map(|var| env(var))
        .filter(|base| !base.is_empty())
        .map(|base| {
            PathBuf::from(base)
                .join(&config.mod_manager)
                .join(&config.game)
                .join(PROFILES_DIR)
        })
        .collect()
}

/// Resolves the loader directory using the given environment lookup.
///
/// Returns `None` when no candidate profiles directory exists or the
/// configured profile is missing from the first one that does.
#[must_use]
pub fn find_loader_dir_with<F>(config: &DeployConfig, env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let profiles_dir = profiles_dir_candidates(config, env)
        .into_iter()
        .find(|dir| dir.is_dir())?;

    let profile_dir = profiles_dir.join(&config.profile);
    if !profile_dir.is_dir() {
        debug!(profile = %profile_dir.display(), "Profile directory not found");
        return None;
    }

    Some(profile_dir.join(&config.loader_dir))
}

/// Resolves the loader directory from the process environment.
#[must_use]
pub fn find_loader_dir(config: &DeployConfig) -> Option<PathBuf> {
    find_loader_dir_with(config, |var| std::env::var_os(var))
}

/// Folder name for the mod under `plugins/` or `patchers/`.
#[must_use]
pub fn mod_folder_name(author: &str, name: &str) -> String {
    format!("{author}-{name}")
}

/// Copies every present component's artifacts into `loader_dir`.
///
/// # Errors
///
/// Returns an error if manifest keys are missing, artifacts cannot be
/// resolved, or a directory or file operation fails.
pub fn deploy_to(ctx: &ModContext, loader_dir: &Path) -> Result<DeployReport> {
    let project = ctx.project();
    let manifest = ctx.manifest();
    let folder = mod_folder_name(manifest.author()?, manifest.name()?);

    let mut components = Vec::new();
    for kind in project.components() {
        let target_dir = loader_dir.join(kind.install_dir()).join(&folder);
        let artifacts = project.artifacts(kind, manifest)?;

        info!(dir = %target_dir.display(), "Copying {kind}");

        if !ctx.is_dry_run() {
            ensure_dir(&target_dir)?;
        }

        let mut files = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            if ctx.is_dry_run() {
                info!(file = %artifact.display(), "[DRY-RUN] would copy file");
            } else {
                info!(file = %artifact.display(), "Copying file");
                copy_into_dir(&artifact, &target_dir)?;
            }
            files.push(artifact);
        }

        components.push(DeployedComponent {
            kind,
            target_dir,
            files,
        });
    }

    Ok(DeployReport {
        loader_dir: loader_dir.to_path_buf(),
        components,
    })
}

/// Deploys the mod into the configured r2modman profile.
///
/// # Errors
///
/// Returns `DeployError::LoaderDirNotFound` if no profile is found, plus
/// everything [`deploy_to`] can fail with.
pub fn deploy(ctx: &ModContext) -> Result<DeployReport> {
    let config = &ctx.config().deploy;
    let loader_dir = find_loader_dir(config).ok_or_else(|| {
        let searched = profiles_dir_candidates(config, |var| std::env::var_os(var))
            .iter()
            .map(|dir| dir.join(&config.profile).display().to_string())
            .collect::<Vec<_>>();
        DeployError::LoaderDirNotFound {
            searched: if searched.is_empty() {
                format!("no {} set", APP_DATA_VARS.join("/"))
            } else {
                searched.join(", ")
            },
        }
    })?;

    debug!(loader_dir = %loader_dir.display(), "Resolved loader directory");

    deploy_to(ctx, &loader_dir)
        .with_context(|| format!("failed to deploy into {}", loader_dir.display()))
}
