// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Generate command for writing the Sphinx sources.

use console::style;
use flinx::{
    write_template_files, DocWriter, ExistingFiles, GenerateOptions, GeneratedDocs, DOCS_DIR,
};
use std::path::Path;

/// Writes `docs/index.rst` and `docs/conf.py` with the generated banner.
///
/// Files that were ejected are only replaced with `force`.
pub fn run(project_dir: &Path, force: bool, writer: &mut dyn DocWriter) -> anyhow::Result<()> {
    let options = GenerateOptions::default().with_existing(existing_policy(force));
    let docs = write_template_files(project_dir, &project_dir.join(DOCS_DIR), &options, writer)?;
    report(&docs);
    Ok(())
}

pub(crate) fn existing_policy(force: bool) -> ExistingFiles {
    if force {
        ExistingFiles::Overwrite
    } else {
        ExistingFiles::Refuse
    }
}

pub(crate) fn report(docs: &GeneratedDocs) {
    for file in docs.files() {
        println!("{} {}", style("wrote").green(), file.path.display());
    }
}
