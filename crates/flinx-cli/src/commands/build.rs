// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Build command for running `sphinx-build` over the generated sources.

use crate::browser;
use crate::runner::{run_checked, ProcessRunner, ToolCommand};
use crate::sphinx::{self, BuildOptions};
use anyhow::Context;
use console::style;
use flinx::DocWriter;
use std::path::Path;
use std::time::Instant;

/// Program that builds the documentation.
pub const SPHINX_BUILD: &str = "sphinx-build";

/// Generates the docs sources, builds them, and optionally opens the result.
pub fn run(
    project_dir: &Path,
    options: &BuildOptions,
    writer: &mut dyn DocWriter,
    runner: &mut dyn ProcessRunner,
) -> anyhow::Result<()> {
    let invocation = sphinx::prepare(project_dir, options, writer)?;
    let command = ToolCommand::new(SPHINX_BUILD, project_dir).args(invocation.build_args);

    let start = Instant::now();
    run_checked(runner, &command).context("Documentation build failed")?;
    println!(
        "{} {} {}",
        style("Built").green(),
        invocation.build_dir.display(),
        style(format!("{}ms", start.elapsed().as_millis())).dim()
    );

    if options.open && options.format.is_html() {
        // Relative to the opener's working directory.
        let index = invocation.build_dir.join("index.html");
        if let Err(err) = browser::open(runner, &index, project_dir) {
            tracing::warn!("Failed to open browser: {}", err);
        }
    }
    Ok(())
}
