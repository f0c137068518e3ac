// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Sphinx configuration resolved from the project manifest.
//!
//! Settings live in the `tool.flinx.configuration` table of `pyproject.toml`.
//! Every key is passed through to the generated `conf.py`.
//!
//! # Example Configuration
//!
//! ```toml
//! [tool.flinx.configuration]
//! extensions = ["napoleon", "sphinxcontrib.mermaid"]
//! html_theme = "alabaster"
//! intersphinx_mapping = { python = ["https://docs.python.org/3", ""] }
//! ```
//!
//! A project without a manifest, or without this table, gets an empty
//! configuration. Sphinx defaults and the default extension list apply.

use crate::error::{FlinxError, Result};
use crate::extensions::EXTENSIONS_KEY;
use crate::manifest::Manifest;
use std::path::Path;

/// Table path of the configuration inside `pyproject.toml`.
pub const CONFIGURATION_PATH: [&str; 3] = ["tool", "flinx", "configuration"];

/// Configuration mapping from `tool.flinx.configuration`.
///
/// Keys keep the order they have in the manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    values: toml::Table,
}

impl Configuration {
    /// Wraps an already-built table.
    pub fn new(values: toml::Table) -> Self {
        Self { values }
    }

    /// Loads configuration from `pyproject.toml` in `project_dir`.
    ///
    /// If no manifest exists, or any segment of `tool.flinx.configuration` is
    /// missing, returns an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest exists but cannot be read or parsed.
    pub fn load(project_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Manifest::load(project_dir)?
            .map(|manifest| Self::from_manifest(&manifest))
            .unwrap_or_default())
    }

    /// Extracts the configuration table from a parsed manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        match manifest.lookup(&CONFIGURATION_PATH) {
            Some(table) => Self::new(table.clone()),
            None => {
                tracing::debug!(
                    "No [{}] table in {}, using defaults",
                    CONFIGURATION_PATH.join("."),
                    manifest.path().display()
                );
                Self::default()
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.values.get(key)
    }

    /// Iterates over the configuration keys in manifest order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over key/value pairs in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &toml::Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of configuration keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no configuration keys are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The user's `extensions` list, if one is declared.
    ///
    /// # Errors
    ///
    /// Returns [`FlinxError::InvalidConfiguration`] if `extensions` is not an
    /// array of strings.
    pub fn declared_extensions(&self) -> Result<Option<Vec<String>>> {
        let Some(value) = self.values.get(EXTENSIONS_KEY) else {
            return Ok(None);
        };
        let invalid = || FlinxError::InvalidConfiguration {
            key: EXTENSIONS_KEY.to_string(),
            message: format!("expected an array of strings, found {}", value.type_str()),
        };
        let items = value.as_array().ok_or_else(invalid)?;
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Replaces the `extensions` value.
    ///
    /// An existing key keeps its position; otherwise it is appended.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        let value = toml::Value::Array(extensions.into_iter().map(toml::Value::String).collect());
        self.values.insert(EXTENSIONS_KEY.to_string(), value);
        self
    }
}

impl From<toml::Table> for Configuration {
    fn from(values: toml::Table) -> Self {
        Self::new(values)
    }
}
