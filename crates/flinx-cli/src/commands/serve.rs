// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Serve command: live-reloading docs server via `sphinx-autobuild`.

use crate::runner::{run_checked, ProcessRunner, ToolCommand};
use crate::sphinx::{self, BuildOptions};
use anyhow::Context;
use console::style;
use flinx::DocWriter;
use std::path::Path;

/// Program that serves the documentation.
pub const SPHINX_AUTOBUILD: &str = "sphinx-autobuild";

/// `sphinx-autobuild` flag that opens the browser once the server is up.
const OPEN_BROWSER_FLAG: &str = "-B";

/// Generates the docs sources and runs `sphinx-autobuild` until interrupted.
pub fn run(
    project_dir: &Path,
    options: &BuildOptions,
    writer: &mut dyn DocWriter,
    runner: &mut dyn ProcessRunner,
) -> anyhow::Result<()> {
    let mut invocation = sphinx::prepare(project_dir, options, writer)?;
    if options.open {
        invocation.build_args.push(OPEN_BROWSER_FLAG.to_string());
    }

    println!(
        "{} {}",
        style("Serving docs from").cyan(),
        invocation.docs_dir.display()
    );
    println!("Press Ctrl+C to stop...");

    let command = ToolCommand::new(SPHINX_AUTOBUILD, project_dir).args(invocation.build_args);
    run_checked(runner, &command).context("Documentation server failed")?;
    Ok(())
}
