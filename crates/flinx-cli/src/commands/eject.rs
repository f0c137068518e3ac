// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Eject command: hand the Sphinx sources over to the user.

use super::generate::{existing_policy, report};
use console::style;
use flinx::{write_template_files, DocWriter, GenerateOptions, DOCS_DIR};
use std::path::Path;

/// Writes `docs/index.rst` and `docs/conf.py` without the generated banner.
///
/// Later builds use these files as they are.
pub fn run(project_dir: &Path, force: bool, writer: &mut dyn DocWriter) -> anyhow::Result<()> {
    let options = GenerateOptions::eject().with_existing(existing_policy(force));
    let docs = write_template_files(project_dir, &project_dir.join(DOCS_DIR), &options, writer)?;
    report(&docs);
    println!();
    println!(
        "{}",
        style("These files are yours now; flinx will no longer regenerate them.").dim()
    );
    Ok(())
}
