// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers with error context.

use crate::error::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates `dir` and any missing parents.
///
/// # Errors
///
/// Returns an error if the path exists but is not a directory, or if it
/// cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        anyhow::bail!("path exists but is not a directory: {}", dir.display());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))
}

/// Copies `src` into `dst_dir` under its own file name, replacing any
/// existing file. Returns the destination path.
///
/// # Example
/// ```no_run
/// use modpacker::utility::fs::copy_into_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// copy_into_dir(Path::new("plugin/bin/MyMod.dll"), Path::new("/profile/BepInEx/plugins/me-MyMod"))?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if `src` has no file name or the copy fails.
pub fn copy_into_dir(src: &Path, dst_dir: &Path) -> Result<PathBuf> {
    let file_name = src
        .file_name()
        .with_context(|| format!("source has no file name: {}", src.display()))?;
    let dst = dst_dir.join(file_name);

    fs::copy(src, &dst)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;

    Ok(dst)
}

/// Removes `path` if it exists. Returns whether a file was removed.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
    }
}

#[cfg(test)]
mod tests;
