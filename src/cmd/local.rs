// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `local` action: copy build output into the r2modman profile.

use anyhow::Context;
use tracing::info;

use super::ModContext;
use crate::deploy::deploy;
use crate::error::Result;

/// Handler for the `local` action.
///
/// # Errors
///
/// Returns an error if the profile cannot be found or copying fails.
pub fn run_local_command(ctx: &ModContext) -> Result<()> {
    info!("Copying the mod to BepInEx folder");

    let report = deploy(ctx).context("local deployment failed")?;

    info!(
        loader_dir = %report.loader_dir.display(),
        files = report.file_count(),
        "Finished copying the mod to BepInEx folder"
    );
    Ok(())
}
