// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use super::{ModContext, run_actions};
use crate::cli::actions::Actions;
use crate::config::Config;
use crate::error::ModpackError;
use crate::project::Project;
use crate::project::test_utils::ModFixture;

#[test]
fn test_load_reads_manifest() {
    let fixture = ModFixture::new();
    let ctx = ModContext::load(Project::new(fixture.root()), Config::default()).unwrap();

    assert_eq!(ctx.manifest().name().unwrap(), "ExampleMod");
    assert_eq!(ctx.project().root(), fixture.root());
    assert!(!ctx.is_dry_run());
}

#[test]
fn test_load_tolerates_missing_keys() {
    let fixture = ModFixture::new();
    fixture.write("meta/manifest.json", r#"{"author": "someone"}"#);

    let ctx = ModContext::load(Project::new(fixture.root()), Config::default()).unwrap();
    assert!(ctx.manifest().name().is_err());
}

#[test]
fn test_load_rejects_path_like_name() {
    let fixture = ModFixture::new();
    fixture.write(
        "meta/manifest.json",
        r#"{"name": "../Escape", "author": "someone"}"#,
    );

    let err = ModContext::load(Project::new(fixture.root()), Config::default()).unwrap_err();
    assert!(matches!(err, ModpackError::Bailed(_)));
    assert!(err.to_string().contains("'../Escape'"));
}

#[test]
fn test_load_fails_on_broken_manifest() {
    let fixture = ModFixture::new();
    fixture.write("meta/manifest.json", "{ not json");

    let err = ModContext::load(Project::new(fixture.root()), Config::default()).unwrap_err();
    assert!(matches!(err, ModpackError::Manifest(_)));
}

#[test]
fn test_dry_run_flag() {
    let fixture = ModFixture::new();
    let mut config = Config::default();
    config.global.dry = true;

    assert!(fixture.context(config).is_dry_run());
}

#[test]
fn test_run_thunderstore_only() {
    let fixture = ModFixture::new();
    let ctx = fixture.context(Config::default());

    run_actions(Actions::THUNDERSTORE, &ctx).unwrap();

    assert!(
        fixture
            .root()
            .join("release/Thunderstore/ExampleMod.zip")
            .is_file()
    );
}

#[test]
fn test_run_all_stops_at_failed_local() {
    let fixture = ModFixture::new();
    let profiles = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.deploy.profiles_dir = Some(profiles.path().to_path_buf());
    let ctx = fixture.context(config);

    let err = run_actions(Actions::all(), &ctx).unwrap_err();

    assert!(format!("{err:#}").contains("local deployment failed"));
    assert!(!fixture.root().join("release").exists());
}

#[test]
fn test_run_all_with_profile() {
    let fixture = ModFixture::new();
    let profiles = tempfile::tempdir().unwrap();
    fs::create_dir_all(profiles.path().join("Default")).unwrap();
    let mut config = Config::default();
    config.deploy.profiles_dir = Some(profiles.path().to_path_buf());
    let ctx = fixture.context(config);

    run_actions(Actions::all(), &ctx).unwrap();

    assert!(
        profiles
            .path()
            .join("Default/BepInEx/plugins/someone-ExampleMod/ExampleMod.dll")
            .is_file()
    );
    assert!(
        fixture
            .root()
            .join("release/Thunderstore/ExampleMod.zip")
            .is_file()
    );
}
