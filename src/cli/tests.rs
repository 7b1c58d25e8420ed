// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::cli::actions::{Action, Actions};
use crate::cli::global::{ConfigOverride, GlobalOptions};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_no_actions_means_all() {
    let cli = Cli::try_parse_from(["modpacker"]).unwrap();
    assert!(cli.actions.is_empty());

    let explicit = Cli::try_parse_from(["modpacker", "local", "thunderstore"]).unwrap();
    assert_eq!(cli.requested_actions(), explicit.requested_actions());
    assert_eq!(cli.requested_actions(), Actions::all());
}

#[test]
fn test_single_action() {
    let cli = Cli::try_parse_from(["modpacker", "thunderstore"]).unwrap();
    assert_eq!(cli.actions, vec![Action::Thunderstore]);
    assert_eq!(cli.requested_actions(), Actions::THUNDERSTORE);
}

#[test]
fn test_execution_order_is_fixed() {
    let actions = Actions::from_requested(&[Action::Thunderstore, Action::Local, Action::Local]);
    let ordered: Vec<_> = actions.ordered().collect();
    assert_eq!(ordered, vec![Action::Local, Action::Thunderstore]);
    insta::assert_snapshot!(actions.describe(), @"local, thunderstore");
}

#[test]
fn test_unknown_action_rejected() {
    let result = Cli::try_parse_from(["modpacker", "steam"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "modpacker",
        "-l",
        "5",
        "-C",
        "/tmp/mymod",
        "--dry",
        "--profile",
        "Testing",
        "-c",
        "a.toml",
        "-c",
        "b.toml",
        "local",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.project_dir, Some(PathBuf::from("/tmp/mymod")));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.requested_actions(), Actions::LOCAL);
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["modpacker", "-l", "7"]).is_err());
}

#[test]
fn test_config_overrides() {
    let global = GlobalOptions {
        dry: true,
        profile: Some("Testing".to_string()),
        ..Default::default()
    };

    assert_eq!(
        global.to_config_overrides(),
        vec![
            ConfigOverride::Bool("global.dry", true),
            ConfigOverride::Text("deploy.profile", "Testing".to_string()),
        ]
    );
    assert!(GlobalOptions::default().to_config_overrides().is_empty());
}
