// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   ensure_dir()             create_dir_all with context
//!   copy_into_dir()          copy a file, overwriting the target
//!   remove_file_if_exists()  delete a stale output file
//! ```

pub mod fs;
