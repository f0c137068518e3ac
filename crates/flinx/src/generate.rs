// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Generation of the Sphinx source directory.
//!
//! [`write_template_files`] runs the whole pipeline: resolve configuration
//! and metadata, infer extensions, render `index.rst` and `conf.py`, and hand
//! them to a [`DocWriter`].
//!
//! Generated files start with [`GENERATED_TEXT`]. A file without it was
//! ejected or hand-written, and [`ExistingFiles`] decides what happens to it.

use crate::config::Configuration;
use crate::error::{FlinxError, Result};
use crate::extensions::resolve_extensions;
use crate::metadata::ProjectMetadata;
use crate::render::{RenderContext, TemplateEngine};
use crate::writer::DocWriter;
use chrono::Datelike;
use std::path::{Path, PathBuf};

/// Banner written at the top of generated files.
pub const GENERATED_TEXT: &str =
    "THIS FILE IS AUTOMATICALLY GENERATED BY FLINX. MANUAL CHANGES WILL BE LOST.";

/// Sphinx source directory, relative to the project.
pub const DOCS_DIR: &str = "docs";

/// Generated index document.
pub const INDEX_FILE: &str = "index.rst";

/// Generated Sphinx configuration.
pub const CONF_FILE: &str = "conf.py";

/// What to do with a target file that flinx did not generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingFiles {
    /// Replace it.
    Overwrite,
    /// Leave it alone and use it as is.
    KeepEjected,
    /// Fail with [`FlinxError::WouldOverwrite`].
    Refuse,
}

/// Options for [`write_template_files`].
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Start each file with [`GENERATED_TEXT`].
    pub include_generated_warning: bool,
    /// Policy for files without the banner.
    pub existing: ExistingFiles,
    /// Copyright year; defaults to the current year.
    pub copyright_year: Option<i32>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            include_generated_warning: true,
            existing: ExistingFiles::Refuse,
            copyright_year: None,
        }
    }
}

impl GenerateOptions {
    /// Options for `flinx eject`: no banner.
    pub fn eject() -> Self {
        Self {
            include_generated_warning: false,
            ..Self::default()
        }
    }

    /// Sets the existing-file policy.
    pub fn with_existing(mut self, existing: ExistingFiles) -> Self {
        self.existing = existing;
        self
    }

    /// Pins the copyright year.
    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = Some(year);
        self
    }
}

/// Result of writing one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written.
    Written,
    /// An ejected file was left untouched.
    KeptEjected,
}

/// A target file and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Whether it was written.
    pub outcome: WriteOutcome,
}

/// The two files making up a Sphinx source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocs {
    /// `index.rst`.
    pub index: GeneratedFile,
    /// `conf.py`.
    pub conf: GeneratedFile,
}

impl GeneratedDocs {
    /// Directory holding `conf.py`, as passed to `sphinx-build -c`.
    pub fn conf_dir(&self) -> &Path {
        self.conf.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Both files, index first.
    pub fn files(&self) -> [&GeneratedFile; 2] {
        [&self.index, &self.conf]
    }
}

/// Generates `index.rst` and `conf.py` for the project in `project_dir`
/// into `output_dir`.
///
/// # Errors
///
/// Fails if the manifest cannot be parsed, `extensions` has the wrong type,
/// rendering fails, the writer fails, or a non-generated file is in the way
/// under [`ExistingFiles::Refuse`].
pub fn write_template_files(
    project_dir: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
    writer: &mut dyn DocWriter,
) -> Result<GeneratedDocs> {
    let metadata = ProjectMetadata::from_dir(project_dir)?;
    let config = Configuration::load(project_dir)?;
    let extensions = resolve_extensions(&config)?;
    tracing::info!("Sphinx extensions: {}", extensions.join(", "));
    let config = config.with_extensions(extensions);

    let engine = TemplateEngine::new()?;
    let ctx = RenderContext {
        metadata: &metadata,
        configuration: &config,
        copyright_year: options
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year()),
        generated_text: options
            .include_generated_warning
            .then_some(GENERATED_TEXT),
    };

    let index_path = output_dir.join(INDEX_FILE);
    let index_source = engine.render_index(&ctx)?;
    let conf_path = output_dir.join(CONF_FILE);
    let conf_source = engine.render_conf(&ctx)?;

    // Both targets are checked before either is written.
    let index = plan_target(writer, &index_path, options.existing)?;
    let conf = plan_target(writer, &conf_path, options.existing)?;

    for (file, contents) in [(&index, &index_source), (&conf, &conf_source)] {
        match file.outcome {
            WriteOutcome::Written => {
                writer.write(&file.path, contents)?;
                tracing::info!("Wrote {}", file.path.display());
            }
            WriteOutcome::KeptEjected => {
                tracing::info!("Keeping ejected {}", file.path.display());
            }
        }
    }

    Ok(GeneratedDocs { index, conf })
}

/// Decides the outcome for `path` without touching it.
fn plan_target(
    writer: &dyn DocWriter,
    path: &Path,
    existing: ExistingFiles,
) -> Result<GeneratedFile> {
    let ejected = writer
        .read_existing(path)?
        .is_some_and(|current| !current.contains(GENERATED_TEXT));

    let outcome = match (ejected, existing) {
        (true, ExistingFiles::KeepEjected) => WriteOutcome::KeptEjected,
        (true, ExistingFiles::Refuse) => {
            return Err(FlinxError::WouldOverwrite {
                path: path.to_path_buf(),
            })
        }
        _ => WriteOutcome::Written,
    };

    Ok(GeneratedFile {
        path: path.to_path_buf(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::MemoryWriter;
    use std::fs;

    fn project(pyproject: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), pyproject).unwrap();
        dir
    }

    const PYPROJECT: &str = r#"
[project]
name = "demo"
version = "0.3.0"
authors = [{ name = "Jane Doe" }]

[tool.flinx.configuration]
extensions = ["autodoc"]
image_format = "png"
"#;

    #[test]
    fn test_generate_writes_both_files() {
        let dir = project(PYPROJECT);
        let mut writer = MemoryWriter::new();
        let docs = write_template_files(
            dir.path(),
            Path::new("docs"),
            &GenerateOptions::default().with_copyright_year(2018),
            &mut writer,
        )
        .unwrap();

        assert_eq!(docs.index.path, PathBuf::from("docs/index.rst"));
        assert_eq!(docs.conf.path, PathBuf::from("docs/conf.py"));
        assert_eq!(docs.conf_dir(), Path::new("docs"));
        assert!(docs.files().iter().all(|f| f.outcome == WriteOutcome::Written));

        let conf = writer.get("docs/conf.py").unwrap();
        assert!(conf.contains(GENERATED_TEXT));
        assert!(conf.contains("copyright = '2018, Jane Doe'"));
        assert!(conf.contains("extensions = ['sphinx.ext.autodoc', 'sphinx.ext.imgconverter']"));
        assert!(conf.contains("image_format = 'png'"));

        let index = writer.get("docs/index.rst").unwrap();
        assert!(index.contains(GENERATED_TEXT));
        assert!(index.contains(".. automodule:: demo"));
    }

    #[test]
    fn test_default_extensions_appended() {
        let dir = project("[project]\nname = \"demo\"\n");
        let mut writer = MemoryWriter::new();
        write_template_files(dir.path(), Path::new("docs"), &GenerateOptions::default(), &mut writer)
            .unwrap();
        let conf = writer.get("docs/conf.py").unwrap();
        assert!(conf.contains("extensions = ['sphinx.ext.autodoc']\n"));
    }

    #[test]
    fn test_eject_omits_banner() {
        let dir = project(PYPROJECT);
        let mut writer = MemoryWriter::new();
        write_template_files(dir.path(), Path::new("docs"), &GenerateOptions::eject(), &mut writer)
            .unwrap();
        assert!(!writer.get("docs/conf.py").unwrap().contains(GENERATED_TEXT));
        assert!(!writer.get("docs/index.rst").unwrap().contains(GENERATED_TEXT));
    }

    #[test]
    fn test_regenerate_over_generated_files() {
        let dir = project(PYPROJECT);
        let mut writer = MemoryWriter::new();
        writer.insert("docs/conf.py", format!("# {GENERATED_TEXT}\nold = 1\n"));
        write_template_files(dir.path(), Path::new("docs"), &GenerateOptions::default(), &mut writer)
            .unwrap();
        assert!(!writer.get("docs/conf.py").unwrap().contains("old = 1"));
    }

    #[test]
    fn test_refuse_overwriting_ejected_file() {
        let dir = project(PYPROJECT);
        let mut writer = MemoryWriter::new();
        writer.insert("docs/index.rst", "My own index\n");
        let err = write_template_files(
            dir.path(),
            Path::new("docs"),
            &GenerateOptions::default(),
            &mut writer,
        )
        .unwrap_err();
        assert!(matches!(err, FlinxError::WouldOverwrite { ref path } if path == Path::new("docs/index.rst")));
        assert_eq!(writer.get("docs/index.rst"), Some("My own index\n"));
    }

    #[test]
    fn test_refuse_leaves_other_file_untouched() {
        let dir = project(PYPROJECT);
        let mut writer = MemoryWriter::new();
        writer.insert("docs/conf.py", "project = 'mine'\n");
        let err = write_template_files(
            dir.path(),
            Path::new("docs"),
            &GenerateOptions::default(),
            &mut writer,
        )
        .unwrap_err();
        assert!(matches!(err, FlinxError::WouldOverwrite { ref path } if path == Path::new("docs/conf.py")));
        assert_eq!(writer.get("docs/index.rst"), None);
        assert_eq!(writer.get("docs/conf.py"), Some("project = 'mine'\n"));
    }

    #[test]
    fn test_keep_ejected_file() {
        let dir = project(PYPROJECT);
        let mut writer = MemoryWriter::new();
        writer.insert("docs/conf.py", "project = 'custom'\n");
        let docs = write_template_files(
            dir.path(),
            Path::new("docs"),
            &GenerateOptions::default().with_existing(ExistingFiles::KeepEjected),
            &mut writer,
        )
        .unwrap();

        assert_eq!(docs.conf.outcome, WriteOutcome::KeptEjected);
        assert_eq!(docs.index.outcome, WriteOutcome::Written);
        assert_eq!(writer.get("docs/conf.py"), Some("project = 'custom'\n"));
    }

    #[test]
    fn test_force_overwrite() {
        let dir = project(PYPROJECT);
        let mut writer = MemoryWriter::new();
        writer.insert("docs/conf.py", "project = 'custom'\n");
        write_template_files(
            dir.path(),
            Path::new("docs"),
            &GenerateOptions::eject().with_existing(ExistingFiles::Overwrite),
            &mut writer,
        )
        .unwrap();
        assert!(writer.get("docs/conf.py").unwrap().contains("project = 'demo'"));
    }

    #[test]
    fn test_invalid_extensions_value() {
        let dir = project("[tool.flinx.configuration]\nextensions = \"autodoc\"\n");
        let mut writer = MemoryWriter::new();
        let err = write_template_files(
            dir.path(),
            Path::new("docs"),
            &GenerateOptions::default(),
            &mut writer,
        )
        .unwrap_err();
        assert!(matches!(err, FlinxError::InvalidConfiguration { .. }));
        assert_eq!(writer.paths().count(), 0);
    }
}
