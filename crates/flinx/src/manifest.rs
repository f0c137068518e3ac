// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Access to the project's `pyproject.toml`.

use crate::error::{FlinxError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the packaging manifest.
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// A parsed `pyproject.toml`.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: toml::Table,
}

impl Manifest {
    /// Loads the manifest from `project_dir`.
    ///
    /// Returns `Ok(None)` when the project has no manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(project_dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = project_dir.as_ref().join(MANIFEST_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("No {} in {}", MANIFEST_FILE, project_dir.as_ref().display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        Self::parse(path, &content).map(Some)
    }

    /// Parses manifest text. `path` is only used for error messages.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        match content.parse::<toml::Table>() {
            Ok(document) => Ok(Self { path, document }),
            Err(source) => Err(FlinxError::ManifestParse { path, source }),
        }
    }

    /// Path the manifest was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Follows a chain of table keys, e.g. `["tool", "flinx"]`.
    ///
    /// Returns `None` if any segment is missing or is not a table.
    pub fn lookup(&self, segments: &[&str]) -> Option<&toml::Table> {
        segments
            .iter()
            .try_fold(&self.document, |table, segment| table.get(*segment)?.as_table())
    }

    /// Deserializes the whole document into a typed view.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        toml::Value::Table(self.document.clone())
            .try_into()
            .map_err(|source| FlinxError::ManifestSchema {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_nested_table() {
        let manifest = Manifest::parse(
            "pyproject.toml",
            "[tool.flinx.configuration]\nhtml_theme = \"alabaster\"\n",
        )
        .unwrap();

        let table = manifest.lookup(&["tool", "flinx", "configuration"]).unwrap();
        assert_eq!(table["html_theme"].as_str(), Some("alabaster"));
        assert!(manifest.lookup(&["tool", "poetry"]).is_none());
    }

    #[test]
    fn test_lookup_through_scalar_is_none() {
        let manifest = Manifest::parse("pyproject.toml", "[tool]\nflinx = 3\n").unwrap();
        assert!(manifest.lookup(&["tool", "flinx", "configuration"]).is_none());
    }

    #[test]
    fn test_parse_error_keeps_path() {
        let err = Manifest::parse("some/pyproject.toml", "[tool\n").unwrap_err();
        match err {
            FlinxError::ManifestParse { path, .. } => {
                assert_eq!(path, PathBuf::from("some/pyproject.toml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Manifest::load(dir.path()).unwrap().is_none());
    }
}
