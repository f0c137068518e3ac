// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! This module contains the implementations for all flinx CLI commands:
//!
//! - `generate`: Write `docs/index.rst` and `docs/conf.py`
//! - `eject`: Write the same files without the generated banner
//! - `build`: Generate and run `sphinx-build`
//! - `serve`: Generate and run `sphinx-autobuild`

/// Documentation build command.
pub mod build;
/// Eject command.
pub mod eject;
/// Generate command.
pub mod generate;
/// Live-reload server command.
pub mod serve;
