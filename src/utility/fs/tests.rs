// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{copy_into_dir, ensure_dir, remove_file_if_exists};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_ensure_dir_creates_nested_and_is_idempotent() {
    let temp = temp_dir();
    let dir = temp.path().join("a/b/c");

    ensure_dir(&dir).unwrap();
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn test_ensure_dir_rejects_file() {
    let temp = temp_dir();
    let file = temp.path().join("file");
    std::fs::write(&file, "").unwrap();

    assert!(ensure_dir(&file).is_err());
}

#[test]
fn test_copy_into_dir_overwrites() {
    let temp = temp_dir();
    let src = temp.path().join("Mod.dll");
    let dst_dir = temp.path().join("out");
    std::fs::create_dir(&dst_dir).unwrap();
    std::fs::write(dst_dir.join("Mod.dll"), "old").unwrap();
    std::fs::write(&src, "new").unwrap();

    let dst = copy_into_dir(&src, &dst_dir).unwrap();

    assert_eq!(dst, dst_dir.join("Mod.dll"));
    assert_eq!(std::fs::read_to_string(dst).unwrap(), "new");
}

#[test]
fn test_copy_into_dir_missing_source_has_context() {
    let temp = temp_dir();
    let err = copy_into_dir(&temp.path().join("Missing.dll"), temp.path()).unwrap_err();
    assert!(err.to_string().starts_with("failed to copy "));
}

#[test]
fn test_remove_file_if_exists() {
    let temp = temp_dir();
    let file = temp.path().join("old.zip");
    std::fs::write(&file, "").unwrap();

    assert!(remove_file_if_exists(&file).unwrap());
    assert!(!file.exists());
    assert!(!remove_file_if_exists(&file).unwrap());
}
