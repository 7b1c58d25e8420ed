// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixtures for unit tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::Project;
use crate::cmd::ModContext;
use crate::config::Config;

pub(crate) const MANIFEST_JSON: &str = r#"{
    "name": "ExampleMod",
    "author": "someone",
    "version_number": "1.2.3",
    "website_url": "https://example.com/mod",
    "description": "An example",
    "dependencies": ["BepInEx-BepInExPack-5.4.2100"],
    "artifacts": { "plugin": ["ExampleMod.pdb"] },
    "build_notes": "not part of the package"
}"#;

/// A mod project in a temp dir with a built plugin.
pub(crate) struct ModFixture {
    temp: TempDir,
}

impl ModFixture {
    pub(crate) fn new() -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let fixture = Self { temp };
        fixture.write("plugin/ExampleMod.csproj", "<Project />");
        fixture.write("plugin/bin/ExampleMod.dll", "plugin dll");
        fixture.write("plugin/bin/ExampleMod.pdb", "plugin pdb");
        fixture.write("meta/manifest.json", MANIFEST_JSON);
        fixture.write("meta/README.md", "# ExampleMod");
        fixture.write("meta/icon.png", "png");
        fixture
    }

    pub(crate) fn with_patcher(self) -> Self {
        self.write("patcher/ExamplePatcher.csproj", "<Project />");
        self.write("patcher/bin/ExamplePatcher.dll", "patcher dll");
        self
    }

    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub(crate) fn root(&self) -> &Path {
        self.temp.path()
    }

    pub(crate) fn context(&self, config: Config) -> ModContext {
        ModContext::load(Project::new(self.root()), config).expect("fixture should load")
    }
}
