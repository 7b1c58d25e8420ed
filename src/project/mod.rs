// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod project discovery.
//!
//! ```text
//! <root>/
//!   plugin/             (optional) Foo.csproj, bin/Foo.dll
//!   patcher/            (optional) Bar.csproj, bin/Bar.dll
//!   meta/               manifest.json, README.md, icon.png
//!   manifest.json       fallback when meta/ has none
//!   release/Thunderstore/<name>.zip
//!
//! locate_from(start)
//!   start --> parent --> parent ... --> filesystem root
//!   first directory whose validate() == Valid wins
//! ```

pub mod artifacts;
pub mod manifest;


#[cfg(test)]
pub(crate) mod test_utils;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{ModpackResult, ProjectError};

pub use artifacts::resolve_artifacts;
pub use manifest::Manifest;

const PLUGIN_DIR: &str = "plugin";
const PATCHER_DIR: &str = "patcher";
const META_DIR: &str = "meta";
const RELEASE_DIR: &str = "release";

pub const MANIFEST_FILE: &str = "manifest.json";
pub const README_FILE: &str = "README.md";
pub const ICON_FILE: &str = "icon.png";

/// Buildable component of a mod project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    /// `BepInEx` plugin, loaded at runtime.
    Plugin,
    /// `BepInEx` preloader patcher.
    Patcher,
}

impl ComponentKind {
    /// All kinds, in deployment order.
    pub const ALL: [Self; 2] = [Self::Plugin, Self::Patcher];

    /// Name used for the project subdirectory and the manifest `artifacts` key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plugin => PLUGIN_DIR,
            Self::Patcher => PATCHER_DIR,
        }
    }

    /// Folder name under the loader directory and inside the package.
    #[must_use]
    pub const fn install_dir(self) -> &'static str {
        match self {
            Self::Plugin => "plugins",
            Self::Patcher => "patchers",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of checking whether a directory is a mod project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Valid,
    /// Root directory does not exist.
    MissingRoot,
    /// Neither `plugin/` nor `patcher/` exists.
    MissingComponent,
    /// No `manifest.json` in `meta/` or the root.
    MissingManifest,
}

impl ProjectStatus {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// A mod project rooted at a directory.
///
/// Resource files (manifest, README, icon) are looked up in `meta/` first
/// and fall back to the root when `meta/` does not contain them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
    plugin_dir: PathBuf,
    patcher_dir: PathBuf,
    release_dir: PathBuf,
    manifest_file: PathBuf,
    readme_file: PathBuf,
    icon_file: PathBuf,
}

impl Project {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let meta_dir = root.join(META_DIR);

        Self {
            plugin_dir: root.join(PLUGIN_DIR),
            patcher_dir: root.join(PATCHER_DIR),
            release_dir: root.join(RELEASE_DIR),
            manifest_file: meta_or_root(&meta_dir, &root, MANIFEST_FILE),
            readme_file: meta_or_root(&meta_dir, &root, README_FILE),
            icon_file: meta_or_root(&meta_dir, &root, ICON_FILE),
            root,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn release_dir(&self) -> &Path {
        &self.release_dir
    }

    #[must_use]
    pub fn manifest_file(&self) -> &Path {
        &self.manifest_file
    }

    #[must_use]
    pub fn readme_file(&self) -> &Path {
        &self.readme_file
    }

    #[must_use]
    pub fn icon_file(&self) -> &Path {
        &self.icon_file
    }

    /// Directory holding the given component's sources and `bin/` output.
    #[must_use]
    pub fn component_dir(&self, kind: ComponentKind) -> &Path {
        match kind {
            ComponentKind::Plugin => &self.plugin_dir,
            ComponentKind::Patcher => &self.patcher_dir,
        }
    }

    #[must_use]
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.component_dir(kind).is_dir()
    }

    /// Component kinds whose directory exists, in deployment order.
    pub fn components(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL
            .into_iter()
            .filter(|kind| self.has_component(*kind))
    }

    /// Checks the project layout.
    #[must_use]
    pub fn validate(&self) -> ProjectStatus {
        if !self.root.is_dir() {
            ProjectStatus::MissingRoot
        } else if self.components().next().is_none() {
            ProjectStatus::MissingComponent
        } else if !self.manifest_file.is_file() {
            ProjectStatus::MissingManifest
        } else {
            ProjectStatus::Valid
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Loads the project's manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or is not a JSON object.
    pub fn load_manifest(&self) -> ModpackResult<Manifest> {
        Manifest::load(&self.manifest_file)
    }

    /// Resolves the build artifacts of one component.
    ///
    /// # Errors
    ///
    /// See [`resolve_artifacts`].
    pub fn artifacts(
        &self,
        kind: ComponentKind,
        manifest: &Manifest,
    ) -> ModpackResult<BTreeSet<PathBuf>> {
        let extras = manifest.extra_artifacts(kind)?;
        resolve_artifacts(self.component_dir(kind), &extras)
    }
}

fn meta_or_root(meta_dir: &Path, root: &Path, file_name: &str) -> PathBuf {
    let candidate = meta_dir.join(file_name);
    if candidate.is_file() {
        candidate
    } else {
        root.join(file_name)
    }
}

/// Finds the nearest mod project at or above `start`.
///
/// # Errors
///
/// Returns `ProjectError::NotFound` if no directory up to the filesystem root
/// is a valid project.
pub fn locate_from(start: &Path) -> ModpackResult<Project> {
    let mut dir = start.to_path_buf();

    loop {
        let project = Project::new(&dir);
        let status = project.validate();
        if status.is_valid() {
            debug!(root = %dir.display(), "Found mod project");
            return Ok(project);
        }
        trace!(dir = %dir.display(), ?status, "Not a mod project");

        let Some(parent) = dir
            .parent()
            .filter(|p| *p != dir.as_path())
            .map(Path::to_path_buf)
        else {
            break;
        };
        dir = parent;
    }

    Err(ProjectError::NotFound {
        start: start.display().to_string(),
    }
    .into())
}

/// Finds the nearest mod project at or above the current directory.
///
/// # Errors
///
/// Returns an error if the current directory is unavailable or no project is
/// found.
pub fn locate() -> ModpackResult<Project> {
    let cwd = std::env::current_dir()?;
    locate_from(&cwd)
}
