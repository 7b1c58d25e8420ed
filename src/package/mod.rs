// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Thunderstore package creation.
//!
//! ```text
//! <root>/release/Thunderstore/<name>.zip
//!   manifest.json          name, version_number, website_url,
//!                          description, dependencies (4-space JSON)
//!   README.md
//!   icon.png
//!   plugins/<file>         one per plugin artifact
//!   patchers/<file>        one per patcher artifact
//! ```
//!
//! The archive is written to a temp file next to the target and renamed into
//! place once complete.


use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::cmd::ModContext;
use crate::error::{ModpackResult, Result};
use crate::project::{ICON_FILE, MANIFEST_FILE, Manifest, Project, README_FILE};
use crate::utility::fs::{ensure_dir, remove_file_if_exists};

/// Platform folder under the project's release directory.
pub const PACKAGE_DIR: &str = "Thunderstore";

/// The distribution subset of the mod manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThunderstoreManifest {
    pub name: String,
    pub version_number: String,
    pub website_url: String,
    pub description: String,
    pub dependencies: Vec<String>,
}

impl ThunderstoreManifest {
    /// Extracts the distribution fields from a mod manifest.
    ///
    /// # Errors
    ///
    /// Fails if any of the five fields is missing or has the wrong type.
    pub fn from_manifest(manifest: &Manifest) -> ModpackResult<Self> {
        Ok(Self {
            name: manifest.name()?.to_string(),
            version_number: manifest.version_number()?.to_string(),
            website_url: manifest.website_url()?.to_string(),
            description: manifest.description()?.to_string(),
            dependencies: manifest.dependencies()?,
        })
    }

    /// Serializes as JSON indented with four spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .context("failed to serialize Thunderstore manifest")?;
        Ok(buf)
    }
}

/// Path of the package archive for a mod called `name`.
#[must_use]
pub fn package_path(project: &Project, name: &str) -> PathBuf {
    project
        .release_dir()
        .join(PACKAGE_DIR)
        .join(format!("{name}.zip"))
}

/// Content of one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// In-memory bytes.
    Bytes(Vec<u8>),
    /// File copied from disk.
    File(PathBuf),
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bytes(_) => f.write_str("generated content"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One file inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: String,
    pub source: EntrySource,
}

/// Builder for a zip package.
///
/// # Example
///
/// ```no_run
/// use modpacker::package::PackageBuilder;
///
/// PackageBuilder::new("release/Thunderstore/MyMod.zip")
///     .bytes("manifest.json", b"{}".to_vec())
///     .file("README.md", "meta/README.md")
///     .write()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    archive: PathBuf,
    entries: Vec<PackageEntry>,
}

impl PackageBuilder {
    #[must_use]
    pub fn new(archive: impl AsRef<Path>) -> Self {
        Self {
            archive: archive.as_ref().to_path_buf(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn bytes(mut self, name: impl Into<String>, content: Vec<u8>) -> Self {
        self.entries.push(PackageEntry {
            name: name.into(),
            source: EntrySource::Bytes(content),
        });
        self
    }

    #[must_use]
    pub fn file(mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.entries.push(PackageEntry {
            name: name.into(),
            source: EntrySource::File(path.as_ref().to_path_buf()),
        });
        self
    }

    /// Adds each file as `<prefix>/<file name>`.
    ///
    /// # Errors
    ///
    /// Returns an error if a path has no file name.
    pub fn files_under<I, P>(mut self, prefix: &str, files: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in files {
            let path = path.as_ref();
            let file_name = path
                .file_name()
                .with_context(|| format!("artifact has no file name: {}", path.display()))?;
            self = self.file(format!("{prefix}/{}", file_name.to_string_lossy()), path);
        }
        Ok(self)
    }

    #[must_use]
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    #[must_use]
    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    /// Fails if two entries share an archive name, e.g. `bin/Foo.dll` and
    /// `bin/sub/Foo.dll` both mapping to `plugins/Foo.dll`.
    ///
    /// # Errors
    ///
    /// Names the clashing entry and both sources.
    pub fn check_unique_names(&self) -> Result<()> {
        let mut seen: HashMap<&str, &EntrySource> = HashMap::new();
        for entry in &self.entries {
            if let Some(first) = seen.insert(entry.name.as_str(), &entry.source) {
                anyhow::bail!(
                    "archive entry '{}' would be written twice (from {} and {})",
                    entry.name,
                    first,
                    entry.source
                );
            }
        }
        Ok(())
    }

    /// Writes the archive, replacing any existing file at the target path.
    ///
    /// # Errors
    ///
    /// Returns an error if the target directory is missing, a source file
    /// cannot be read, or the archive cannot be written or moved into place.
    pub fn write(&self) -> Result<()> {
        let dir = self
            .archive
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;

        let mut zip = ZipWriter::new(temp);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in &self.entries {
            debug!(entry = %entry.name, "Adding archive entry");
            zip.start_file(entry.name.as_str(), options)
                .with_context(|| format!("failed to start archive entry {}", entry.name))?;

            match &entry.source {
                EntrySource::Bytes(content) => zip
                    .write_all(content)
                    .with_context(|| format!("failed to write archive entry {}", entry.name))?,
                EntrySource::File(path) => {
                    let mut file = File::open(path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    std::io::copy(&mut file, &mut zip).with_context(|| {
                        format!("failed to add {} as {}", path.display(), entry.name)
                    })?;
                }
            }
        }

        let temp = zip
            .finish()
            .with_context(|| format!("failed to finish archive {}", self.archive.display()))?;

        temp.persist(&self.archive)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to move archive to {}", self.archive.display()))?;

        Ok(())
    }
}

/// Assembles the package for the mod in `ctx` without writing it.
///
/// # Errors
///
/// Returns an error if manifest fields are missing or artifacts cannot be
/// resolved.
pub fn prepare_package(ctx: &ModContext) -> Result<PackageBuilder> {
    let project = ctx.project();
    let manifest = ctx.manifest();
    let distribution = ThunderstoreManifest::from_manifest(manifest)?;

    let mut builder = PackageBuilder::new(package_path(project, &distribution.name))
        .bytes(MANIFEST_FILE, distribution.to_pretty_json()?)
        .file(README_FILE, project.readme_file())
        .file(ICON_FILE, project.icon_file());

    for kind in project.components() {
        let artifacts = project.artifacts(kind, manifest)?;
        builder = builder.files_under(kind.install_dir(), &artifacts)?;
    }

    builder.check_unique_names()?;
    Ok(builder)
}

/// Builds `release/Thunderstore/<name>.zip`, replacing a previous archive.
///
/// # Errors
///
/// Returns an error if the package cannot be assembled or written.
pub fn build_package(ctx: &ModContext) -> Result<PathBuf> {
    let builder = prepare_package(ctx)?;
    let archive = builder.archive().to_path_buf();

    if ctx.is_dry_run() {
        let entries: Vec<_> = builder.entries().iter().map(|e| e.name.as_str()).collect();
        info!(
            archive = %archive.display(),
            ?entries,
            "[DRY-RUN] would create Thunderstore package"
        );
        return Ok(archive);
    }

    if let Some(dir) = archive.parent() {
        ensure_dir(dir)?;
    }
    if remove_file_if_exists(&archive)? {
        debug!(archive = %archive.display(), "Removed previous package");
    }

    info!(archive = %archive.display(), "Creating Thunderstore package");
    builder.write()?;

    Ok(archive)
}
