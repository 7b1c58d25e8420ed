// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use std::path::PathBuf;

use clap::Parser;
use modpacker::cli::Cli;
use modpacker::cli::actions::{Action, Actions};
use modpacker::cli::global::ConfigOverride;

// =============================================================================
// Actions
// =============================================================================

#[test]
fn cli_no_actions_runs_everything() {
    let cli = Cli::try_parse_from(["modpacker"]).unwrap();
    let ordered: Vec<_> = cli.requested_actions().ordered().collect();
    assert_eq!(ordered, vec![Action::Local, Action::Thunderstore]);
}

#[test]
fn cli_local_only() {
    let cli = Cli::try_parse_from(["modpacker", "local"]).unwrap();
    assert_eq!(cli.requested_actions(), Actions::LOCAL);
}

#[test]
fn cli_reversed_actions_keep_fixed_order() {
    let cli = Cli::try_parse_from(["modpacker", "thunderstore", "local"]).unwrap();
    let ordered: Vec<_> = cli.requested_actions().ordered().collect();
    assert_eq!(ordered, vec![Action::Local, Action::Thunderstore]);
}

#[test]
fn cli_invalid_action() {
    let err = Cli::try_parse_from(["modpacker", "publish"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

// =============================================================================
// Global options
// =============================================================================

#[test]
fn cli_global_options_after_action() {
    let cli = Cli::try_parse_from([
        "modpacker",
        "thunderstore",
        "--dry",
        "--project-dir",
        "mods/Example",
        "--log-file",
        "modpacker.log",
    ])
    .unwrap();

    assert!(cli.global.dry);
    assert_eq!(cli.global.project_dir, Some(PathBuf::from("mods/Example")));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("modpacker.log")));
    assert_eq!(cli.requested_actions(), Actions::THUNDERSTORE);
}

#[test]
fn cli_profile_becomes_override() {
    let cli = Cli::try_parse_from(["modpacker", "--profile", "Modded", "local"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![ConfigOverride::Text("deploy.profile", "Modded".to_string())]
    );
}

#[test]
fn cli_help_lists_actions() {
    let err = Cli::try_parse_from(["modpacker", "--help"]).unwrap_err();
    let help = err.to_string();
    assert!(help.contains("local"));
    assert!(help.contains("thunderstore"));
}
