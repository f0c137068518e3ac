// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Project metadata inferred from packaging files.
//!
//! Three `pyproject.toml` layouts are understood, in this order of preference:
//!
//! - PEP 621 `[project]`
//! - Poetry `[tool.poetry]`
//! - Flit `[tool.flit.metadata]`
//!
//! Fields that none of them provide fall back to conventions: the module name
//! from the directory name, the version from `__version__` in the module
//! source, and the readme from a `README.*` file in the project root.

use crate::error::Result;
use crate::manifest::Manifest;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref VERSION_ASSIGNMENT: Regex =
        Regex::new(r#"(?m)^__version__\s*(?::\s*str\s*)?=\s*['"]([^'"]+)['"]"#).unwrap();
}

/// Readme files looked for when the manifest names none.
const README_CANDIDATES: &[&str] = &["README.rst", "README.md", "README.txt", "README"];

/// Metadata used to fill in `conf.py` and `index.rst`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Importable module name.
    pub module: String,
    /// Primary author, empty if unknown.
    pub author: String,
    /// Project version, empty if unknown.
    pub version: String,
    /// Readme path relative to the project directory.
    pub readme: Option<PathBuf>,
}

impl ProjectMetadata {
    /// Infers metadata for the project in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `pyproject.toml` exists but cannot be parsed, or a
    /// metadata section has the wrong shape.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let pyproject = match Manifest::load(dir)? {
            Some(manifest) => manifest.deserialize::<PyProject>()?,
            None => PyProject::default(),
        };
        Ok(Self::from_pyproject(dir, &pyproject))
    }

    fn from_pyproject(dir: &Path, pyproject: &PyProject) -> Self {
        let project = pyproject.project.as_ref();
        let poetry = pyproject.tool.as_ref().and_then(|t| t.poetry.as_ref());
        let flit = pyproject
            .tool
            .as_ref()
            .and_then(|t| t.flit.as_ref())
            .and_then(|f| f.metadata.as_ref());

        let module = flit
            .and_then(|f| f.module.clone())
            .or_else(|| project.and_then(|p| p.name.as_deref()).map(module_from_distribution))
            .or_else(|| poetry.and_then(|p| p.name.as_deref()).map(module_from_distribution))
            .unwrap_or_else(|| {
                let name = directory_name(dir);
                tracing::warn!("No project name in manifest, using directory name `{}`", name);
                module_from_distribution(&name)
            });

        let author = project
            .and_then(|p| p.authors.iter().find_map(|a| a.name.clone()))
            .or_else(|| {
                poetry
                    .and_then(|p| p.authors.first())
                    .map(|a| strip_email(a).to_string())
            })
            .or_else(|| flit.and_then(|f| f.author.clone()))
            .unwrap_or_default();

        let version = project
            .and_then(|p| p.version.clone())
            .or_else(|| poetry.and_then(|p| p.version.clone()))
            .or_else(|| find_module_version(dir, &module))
            .unwrap_or_default();

        let readme = project
            .and_then(|p| p.readme.as_ref())
            .and_then(ReadmeField::path)
            .or_else(|| poetry.and_then(|p| p.readme.as_ref()).and_then(PoetryReadme::path))
            .or_else(|| flit.and_then(|f| f.description_file.clone()))
            .map(PathBuf::from)
            .or_else(|| find_readme(dir));

        tracing::debug!(
            "Project metadata: module={} author={:?} version={:?} readme={:?}",
            module,
            author,
            version,
            readme
        );

        Self {
            module,
            author,
            version,
            readme,
        }
    }
}

/// Converts a distribution name (`my-package`) to a module name (`my_package`).
fn module_from_distribution(name: &str) -> String {
    name.replace(['-', '.'], "_")
}

fn directory_name(dir: &Path) -> String {
    dir.canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(dir)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}

/// `"Jane Doe <jane@example.com>"` -> `"Jane Doe"`.
fn strip_email(author: &str) -> &str {
    match author.find('<') {
        Some(idx) => author[..idx].trim_end(),
        None => author.trim(),
    }
}

/// Reads `__version__` from `<module>/__init__.py`, `<module>.py` or the
/// `src/` layout equivalents.
fn find_module_version(dir: &Path, module: &str) -> Option<String> {
    let candidates = [
        dir.join(module).join("__init__.py"),
        dir.join(format!("{module}.py")),
        dir.join("src").join(module).join("__init__.py"),
        dir.join("src").join(format!("{module}.py")),
    ];
    candidates.iter().find_map(|path| {
        let source = fs::read_to_string(path).ok()?;
        let version = VERSION_ASSIGNMENT.captures(&source)?.get(1)?.as_str().to_string();
        tracing::debug!("Found __version__ in {}", path.display());
        Some(version)
    })
}

fn find_readme(dir: &Path) -> Option<PathBuf> {
    README_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|name| dir.join(name).is_file())
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    project: Option<Project>,
    tool: Option<Tool>,
}

#[derive(Debug, Deserialize)]
struct Project {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    authors: Vec<Person>,
    readme: Option<ReadmeField>,
}

#[derive(Debug, Deserialize)]
struct Person {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReadmeField {
    Path(String),
    Table { file: Option<String> },
}

impl ReadmeField {
    fn path(&self) -> Option<String> {
        match self {
            ReadmeField::Path(path) => Some(path.clone()),
            ReadmeField::Table { file } => file.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Tool {
    poetry: Option<Poetry>,
    flit: Option<Flit>,
}

#[derive(Debug, Deserialize)]
struct Poetry {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    readme: Option<PoetryReadme>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PoetryReadme {
    One(String),
    Many(Vec<String>),
}

impl PoetryReadme {
    fn path(&self) -> Option<String> {
        match self {
            PoetryReadme::One(path) => Some(path.clone()),
            PoetryReadme::Many(paths) => paths.first().cloned(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Flit {
    metadata: Option<FlitMetadata>,
}

#[derive(Debug, Deserialize)]
struct FlitMetadata {
    module: Option<String>,
    author: Option<String>,
    #[serde(rename = "description-file")]
    description_file: Option<String>,
}
