// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Argument marshaling for `sphinx-build` and `sphinx-autobuild`.
//!
//! Both programs take the same arguments:
//!
//! ```text
//! -b <format> -c <conf dir> -j auto -q <docs dir> <build dir> [-a]
//! ```
//!
//! Paths are relative to the project directory, which is also the working
//! directory of the spawned program.

use clap::ValueEnum;
use console::style;
use flinx::{
    write_template_files, DocWriter, ExistingFiles, GenerateOptions, WriteOutcome, DOCS_DIR,
};
use std::path::{Path, PathBuf};

/// Name of the directory Sphinx builds into, under the docs directory.
pub const BUILD_DIR: &str = "_build";

/// Sphinx output formats flinx supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Standalone HTML pages.
    #[default]
    Html,
}

impl OutputFormat {
    /// The Sphinx builder name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
        }
    }

    /// Returns true if the output can be opened in a browser.
    pub fn is_html(&self) -> bool {
        matches!(self, OutputFormat::Html)
    }
}

/// Options shared by `flinx build` and `flinx serve`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Rebuild everything (`-a`).
    pub all: bool,
    /// Open the result in a browser.
    pub open: bool,
    /// Output format.
    pub format: OutputFormat,
    /// Report generated files.
    pub verbose: bool,
}

/// Prepared Sphinx invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SphinxInvocation {
    /// Arguments for `sphinx-build` / `sphinx-autobuild`.
    pub build_args: Vec<String>,
    /// Docs directory, relative to the project.
    pub docs_dir: PathBuf,
    /// Build output directory, relative to the project.
    pub build_dir: PathBuf,
}

/// Builds the argument vector.
pub fn sphinx_args(
    format: OutputFormat,
    conf_dir: &Path,
    docs_dir: &Path,
    build_dir: &Path,
    all: bool,
) -> Vec<String> {
    let mut args = vec![
        "-b".to_string(),
        format.as_str().to_string(),
        "-c".to_string(),
        path_arg(conf_dir),
        "-j".to_string(),
        "auto".to_string(),
        "-q".to_string(),
        path_arg(docs_dir),
        path_arg(build_dir),
    ];
    if all {
        args.push("-a".to_string());
    }
    args
}

/// Verb reported for a file under `--verbose`.
fn outcome_verb(outcome: WriteOutcome) -> &'static str {
    match outcome {
        WriteOutcome::Written => "wrote",
        WriteOutcome::KeptEjected => "kept",
    }
}

fn outcome_label(outcome: WriteOutcome) -> console::StyledObject<&'static str> {
    match outcome {
        WriteOutcome::Written => style(outcome_verb(outcome)).green(),
        WriteOutcome::KeptEjected => style(outcome_verb(outcome)).yellow(),
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Writes the docs sources and prepares the Sphinx arguments.
///
/// Ejected files are kept and used as they are.
pub fn prepare(
    project_dir: &Path,
    options: &BuildOptions,
    writer: &mut dyn DocWriter,
) -> anyhow::Result<SphinxInvocation> {
    let docs_dir = PathBuf::from(DOCS_DIR);
    let build_dir = docs_dir.join(BUILD_DIR).join(options.format.as_str());

    let generate = GenerateOptions::default().with_existing(ExistingFiles::KeepEjected);
    let docs = write_template_files(project_dir, &project_dir.join(&docs_dir), &generate, writer)?;
    if options.verbose {
        for file in docs.files() {
            println!("{} {}", outcome_label(file.outcome), file.path.display());
        }
    }

    let conf_dir = docs
        .conf_dir()
        .strip_prefix(project_dir)
        .unwrap_or(&docs_dir)
        .to_path_buf();
    let build_args = sphinx_args(options.format, &conf_dir, &docs_dir, &build_dir, options.all);

    Ok(SphinxInvocation {
        build_args,
        docs_dir,
        build_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphinx_args() {
        let args = sphinx_args(
            OutputFormat::Html,
            Path::new("docs"),
            Path::new("docs"),
            &Path::new("docs").join("_build").join("html"),
            false,
        );
        assert_eq!(
            args,
            vec!["-b", "html", "-c", "docs", "-j", "auto", "-q", "docs", "docs/_build/html"]
        );
    }

    #[test]
    fn test_sphinx_args_all() {
        let args = sphinx_args(
            OutputFormat::Html,
            Path::new("docs"),
            Path::new("docs"),
            Path::new("docs/_build/html"),
            true,
        );
        assert_eq!(args.last().map(String::as_str), Some("-a"));
        assert_eq!(args.len(), 10);
    }

    #[test]
    fn test_outcome_verb() {
        assert_eq!(outcome_verb(WriteOutcome::Written), "wrote");
        assert_eq!(outcome_verb(WriteOutcome::KeptEjected), "kept");
    }

    #[test]
    fn test_prepare_keeps_ejected_conf() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pyproject.toml"), "[project]\nname = \"demo\"\n").unwrap();
        let mut writer = flinx::MemoryWriter::new();
        let conf = dir.path().join("docs").join("conf.py");
        writer.insert(&conf, "project = 'mine'\n");

        let options = BuildOptions {
            verbose: true,
            ..BuildOptions::default()
        };
        let invocation = prepare(dir.path(), &options, &mut writer).unwrap();

        assert_eq!(writer.get(&conf), Some("project = 'mine'\n"));
        assert_eq!(invocation.build_dir, Path::new("docs/_build/html"));
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::default().as_str(), "html");
        assert!(OutputFormat::Html.is_html());
    }
}
