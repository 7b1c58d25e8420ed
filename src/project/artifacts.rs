// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build artifact resolution for a component directory.
//!
//! ```text
//! plugin/
//!   MyMod.csproj   --> project name "MyMod"
//!   bin/
//!     MyMod.dll    <-- always included
//!     extra.dll    <-- from manifest artifacts.plugin
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsError, ModpackResult, ProjectError};

const PROJECT_FILE_EXTENSION: &str = "csproj";
const LIBRARY_EXTENSION: &str = "dll";
const BIN_DIR: &str = "bin";

/// Returns the name of the single `.csproj` file in `dir`, without extension.
///
/// # Errors
///
/// Returns `ProjectError::NoProjectFile` if there is none,
/// `ProjectError::MultipleProjectFiles` if there are several, and an
/// `FsError` if the directory cannot be listed.
pub fn project_name(dir: &Path) -> ModpackResult<String> {
    let entries = std::fs::read_dir(dir).map_err(|e| FsError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| FsError::io(dir, e))?.path();
        let is_project_file = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == PROJECT_FILE_EXTENSION);
        if is_project_file && let Some(stem) = path.file_stem() {
            names.push(stem.to_string_lossy().into_owned());
        }
    }

    match names.len() {
        0 => Err(ProjectError::NoProjectFile {
            dir: dir.display().to_string(),
        }
        .into()),
        1 => Ok(names.remove(0)),
        count => Err(ProjectError::MultipleProjectFiles {
            dir: dir.display().to_string(),
            count,
        }
        .into()),
    }
}

/// Resolves the artifact files of a component.
///
/// The set holds `<dir>/bin/<ProjectName>.dll` plus `<dir>/bin/<extra>` for
/// each extra name. A missing component directory yields an empty set.
///
/// # Errors
///
/// See [`project_name`].
pub fn resolve_artifacts(dir: &Path, extras: &[String]) -> ModpackResult<BTreeSet<PathBuf>> {
    if !dir.is_dir() {
        return Ok(BTreeSet::new());
    }

    let bin_dir = dir.join(BIN_DIR);
    let library = format!("{}.{LIBRARY_EXTENSION}", project_name(dir)?);

    let artifacts: BTreeSet<PathBuf> = std::iter::once(library.as_str())
        .chain(extras.iter().map(String::as_str))
        .map(|name| bin_dir.join(name))
        .collect();

    debug!(dir = %dir.display(), count = artifacts.len(), "Resolved artifacts");
    Ok(artifacts)
}
