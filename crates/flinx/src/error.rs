// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for flinx.
//!
//! # Error Categories
//!
//! - **Manifest errors**: `pyproject.toml` exists but is not valid TOML, or a
//!   section flinx reads has an unexpected shape
//! - **Configuration errors**: a value under `tool.flinx.configuration` has the
//!   wrong type for the way flinx uses it
//! - **Template errors**: rendering `conf.py` or `index.rst` failed
//! - **Overwrite errors**: a target file was not generated by flinx
//!
//! A missing manifest, or a manifest without a `tool.flinx` section, is not an
//! error. Callers get the default configuration instead.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flinx operations.
#[derive(Error, Debug)]
pub enum FlinxError {
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The manifest is not valid TOML.
    #[error("Failed to parse {}", path.display())]
    ManifestParse {
        /// Path of the manifest.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A manifest section has an unexpected structure.
    #[error("Unexpected project metadata in {}", path.display())]
    ManifestSchema {
        /// Path of the manifest.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value has the wrong type.
    #[error("Invalid configuration value for `{key}`: {message}")]
    InvalidConfiguration {
        /// The offending configuration key.
        key: String,
        /// What was expected.
        message: String,
    },

    /// Template rendering failed.
    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    /// A file that flinx did not generate is in the way.
    #[error(
        "Refusing to overwrite {}: it was not generated by flinx (use --force to replace it)",
        path.display()
    )]
    WouldOverwrite {
        /// The file that would have been replaced.
        path: PathBuf,
    },
}

/// Convenience type alias for Results with [`FlinxError`].
pub type Result<T> = std::result::Result<T, FlinxError>;
