// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::path::PathBuf;

use clap::Parser;
use modpacker::cli::Cli;
use modpacker::config::loader::{ConfigLoader, ConfigSource};
use modpacker::config::{Config, ENV_PREFIX};
use modpacker::logging::LOG_ENV_VAR;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.deploy.mod_manager, "r2modmanPlus-local");
    assert_eq!(config.deploy.game, "Outward");
    assert_eq!(config.deploy.profile, "Default");
    assert_eq!(config.deploy.loader_dir, "BepInEx");
}

#[test]
fn config_parse_other_game() {
    let toml = r#"
[global]
dry = true

[deploy]
game = "Valheim"
profile = "Testing"
profiles_dir = "/srv/r2modman/Valheim/profiles"
"#;
    let config = Config::parse(toml).unwrap();

    assert!(config.global.dry);
    assert_eq!(config.deploy.game, "Valheim");
    assert_eq!(config.deploy.profile, "Testing");
    assert_eq!(
        config.deploy.profiles_dir,
        Some(PathBuf::from("/srv/r2modman/Valheim/profiles"))
    );
    assert_eq!(config.deploy.mod_manager, "r2modmanPlus-local");
}

#[test]
fn config_parse_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

#[test]
fn config_parse_rejects_nested_loader_dir() {
    let err = Config::parse("[deploy]\nloader_dir = \"BepInEx/plugins\"\n").unwrap_err();
    assert!(format!("{err:#}").contains("loader_dir"));
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("modpacker.toml");
    let user = temp.path().join("user.toml");
    std::fs::write(&project, "[deploy]\nprofile = \"Project\"\ngame = \"Outward\"\n").unwrap();
    std::fs::write(&user, "[deploy]\nprofile = \"User\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&project)
        .add_toml_file(&user);
    assert_eq!(
        loader.sources(),
        [
            ConfigSource::OptionalFile(project.clone()),
            ConfigSource::File(user.clone()),
        ]
    );

    let config = loader.build().unwrap();
    assert_eq!(config.deploy.profile, "User");
    assert_eq!(config.deploy.game, "Outward");
}

#[test]
fn config_cli_override_beats_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\ndry = false\n[deploy]\nprofile = \"FromFile\"\n")
        .set("deploy.profile", "FromCli")
        .unwrap()
        .set("global.dry", true)
        .unwrap()
        .build()
        .unwrap();

    assert!(config.global.dry);
    assert_eq!(config.deploy.profile, "FromCli");
}

#[test]
fn config_from_missing_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    assert!(ConfigLoader::new()
        .add_toml_file(temp.path().join("absent.toml"))
        .build().is_err());
}

// =============================================================================
// Environment
// =============================================================================

#[test]
fn config_env_between_files_and_cli() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("modpacker.toml");
    std::fs::write(&project, "[deploy]\nprofile = \"Project\"\ngame = \"Outward\"\n").unwrap();

    let from_env = Config::builder()
        .add_toml_file_optional(&project)
        .with_env_vars(
            ENV_PREFIX,
            [
                ("MODPACKER_DEPLOY__PROFILE", "Testing"),
                (LOG_ENV_VAR, "modpacker=trace"),
            ],
        )
        .build()
        .unwrap();
    assert_eq!(from_env.deploy.profile, "Testing");
    assert_eq!(from_env.deploy.game, "Outward");

    let cli = Cli::try_parse_from(["modpacker", "--profile", "Modded"]).unwrap();
    let from_cli = Config::builder()
        .add_toml_file_optional(&project)
        .with_env_vars(ENV_PREFIX, [("MODPACKER_DEPLOY__PROFILE", "Testing")])
        .with_overrides(cli.global.to_config_overrides())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(from_cli.deploy.profile, "Modded");
}
