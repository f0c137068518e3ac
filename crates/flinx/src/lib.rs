// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # flinx
//!
//! Configuration-free Sphinx documentation for Python projects.
//!
//! flinx reads a project's `pyproject.toml`, infers what Sphinx needs to know
//! (module name, author, version, readme, extensions) and renders the
//! `conf.py` and `index.rst` that make up a Sphinx source directory.
//!
//! ## Features
//!
//! - Project metadata from PEP 621, Poetry or Flit manifests
//! - Sphinx settings from `[tool.flinx.configuration]`, passed through verbatim
//! - Extension inference: `todo_include_todos = true` enables `sphinx.ext.todo`
//! - Ejecting: write the files without the generated banner and keep them
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flinx::{write_template_files, FileSystemWriter, GenerateOptions};
//! use std::path::Path;
//!
//! let docs = write_template_files(
//!     Path::new("."),
//!     Path::new("docs"),
//!     &GenerateOptions::default(),
//!     &mut FileSystemWriter,
//! )?;
//! println!("wrote {}", docs.conf.path.display());
//! # Ok::<(), flinx::FlinxError>(())
//! ```

/// Sphinx configuration from `pyproject.toml`.
pub mod config;
/// Error types.
pub mod error;
/// Extension list resolution and inference.
pub mod extensions;
/// `index.rst` / `conf.py` generation.
pub mod generate;
/// `pyproject.toml` access.
pub mod manifest;
/// Project metadata inference.
pub mod metadata;
/// Python literal formatting.
pub mod python;
/// Template rendering.
pub mod render;
/// Output targets for generated files.
pub mod writer;

pub use config::Configuration;
pub use error::{FlinxError, Result};
pub use extensions::{infer_extensions, resolve_extensions};
pub use generate::{
    write_template_files, ExistingFiles, GenerateOptions, GeneratedDocs, GeneratedFile,
    WriteOutcome, DOCS_DIR, GENERATED_TEXT,
};
pub use manifest::Manifest;
pub use metadata::ProjectMetadata;
pub use render::{RenderContext, TemplateEngine};
pub use writer::{DocWriter, FileSystemWriter, MemoryWriter};
