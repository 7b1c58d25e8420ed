// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod manifest (`manifest.json`).
//!
//! ```json
//! {
//!   "name": "MyMod",
//!   "author": "someone",
//!   "version_number": "1.0.0",
//!   "website_url": "https://example.com",
//!   "description": "Does things",
//!   "dependencies": ["BepInEx-BepInExPack-5.4.2100"],
//!   "artifacts": { "plugin": ["MyMod.pdb"], "patcher": [] }
//! }
//! ```
//!
//! Keys are looked up lazily: a missing key only fails the action that needs it.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::ComponentKind;
use crate::error::{ManifestError, ModpackResult};

const ARTIFACTS_KEY: &str = "artifacts";

/// Parsed manifest with typed accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    data: Map<String, Value>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Read` if the file cannot be read,
    /// `ManifestError::Parse` for invalid JSON and `ManifestError::NotAnObject`
    /// if the top-level value is not an object.
    pub fn load(path: &Path) -> ModpackResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(path, &content)
    }

    /// Parses manifest JSON; `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Same as [`Manifest::load`], minus the read error.
    pub fn from_json(path: impl Into<PathBuf>, content: &str) -> ModpackResult<Self> {
        let path = path.into();
        let value: Value = serde_json::from_str(content).map_err(|e| ManifestError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        match value {
            Value::Object(data) => Ok(Self { path, data }),
            _ => Err(ManifestError::NotAnObject {
                path: path.display().to_string(),
            }
            .into()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// Fails if `name` is missing or not a string.
    pub fn name(&self) -> ModpackResult<&str> {
        self.string("name")
    }

    /// # Errors
    ///
    /// Fails if `author` is missing or not a string.
    pub fn author(&self) -> ModpackResult<&str> {
        self.string("author")
    }

    /// # Errors
    ///
    /// Fails if `version_number` is missing or not a string.
    pub fn version_number(&self) -> ModpackResult<&str> {
        self.string("version_number")
    }

    /// # Errors
    ///
    /// Fails if `website_url` is missing or not a string.
    pub fn website_url(&self) -> ModpackResult<&str> {
        self.string("website_url")
    }

    /// # Errors
    ///
    /// Fails if `description` is missing or not a string.
    pub fn description(&self) -> ModpackResult<&str> {
        self.string("description")
    }

    /// Dependency identifiers, in manifest order.
    ///
    /// # Errors
    ///
    /// Fails if `dependencies` is missing or not a list of strings.
    pub fn dependencies(&self) -> ModpackResult<Vec<String>> {
        let value = self.required("dependencies")?;
        self.string_list("dependencies", value)
    }

    /// Extra artifact file names declared under `artifacts.<kind>`.
    ///
    /// Returns an empty list when `artifacts` or the kind's entry is absent.
    ///
    /// # Errors
    ///
    /// Fails if `artifacts` is not an object or the entry is not a list of
    /// strings.
    pub fn extra_artifacts(&self, kind: ComponentKind) -> ModpackResult<Vec<String>> {
        let Some(artifacts) = self.data.get(ARTIFACTS_KEY) else {
            return Ok(Vec::new());
        };
        let artifacts = artifacts
            .as_object()
            .ok_or_else(|| self.invalid(ARTIFACTS_KEY, "an object"))?;

        match artifacts.get(kind.name()) {
            Some(value) => self.string_list(&format!("{ARTIFACTS_KEY}.{kind}"), value),
            None => Ok(Vec::new()),
        }
    }

    fn required(&self, key: &str) -> ModpackResult<&Value> {
        self.data.get(key).ok_or_else(|| {
            ManifestError::MissingKey {
                path: self.path.display().to_string(),
                key: key.to_string(),
            }
            .into()
        })
    }

    fn string(&self, key: &str) -> ModpackResult<&str> {
        self.required(key)?
            .as_str()
            .ok_or_else(|| self.invalid(key, "a string").into())
    }

    fn string_list(&self, key: &str, value: &Value) -> ModpackResult<Vec<String>> {
        let invalid = || self.invalid(key, "a list of strings");
        value
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<_, _>>()
            .map_err(Into::into)
    }

    fn invalid(&self, key: &str, expected: &'static str) -> ManifestError {
        ManifestError::InvalidValue {
            path: self.path.display().to_string(),
            key: key.to_string(),
            expected,
        }
    }
}
