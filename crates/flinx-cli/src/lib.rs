// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! flinx CLI library.
//!
//! This crate provides the command-line interface for flinx.
//! It generates Sphinx sources and drives `sphinx-build` / `sphinx-autobuild`.
//!
//! # Usage
//!
//! This crate is primarily used through the `flinx` binary:
//!
//! ```bash
//! flinx generate   # Write docs/index.rst and docs/conf.py
//! flinx eject      # Same, without the generated banner
//! flinx build      # Generate and build HTML docs
//! flinx serve      # Generate and serve with live reload
//! ```
//!
//! # Configuration
//!
//! Sphinx settings are read from `[tool.flinx.configuration]` in the
//! project's `pyproject.toml`.

/// Opening build output in a browser.
pub mod browser;
/// CLI commands (generate, eject, build, serve).
pub mod commands;
/// External program execution.
pub mod runner;
/// Sphinx argument marshaling.
pub mod sphinx;
