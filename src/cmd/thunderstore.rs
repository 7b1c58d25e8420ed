// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `thunderstore` action: build the distributable package.

use anyhow::Context;
use tracing::info;

use super::ModContext;
use crate::error::Result;
use crate::package::build_package;

/// Handler for the `thunderstore` action.
///
/// # Errors
///
/// Returns an error if the package cannot be assembled or written.
pub fn run_thunderstore_command(ctx: &ModContext) -> Result<()> {
    let archive = build_package(ctx).context("Thunderstore packaging failed")?;
    info!(archive = %archive.display(), "Thunderstore package ready");
    Ok(())
}
