// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Output targets for generated documentation files.
//!
//! # Writer Implementations
//!
//! - [`FileSystemWriter`]: Writes to disk, creating parent directories
//! - [`MemoryWriter`]: Keeps files in memory (testing)

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Destination for generated files.
pub trait DocWriter {
    /// Returns the current contents of `path`, or `None` if it does not exist.
    fn read_existing(&self, path: &Path) -> Result<Option<String>>;

    /// Replaces the contents of `path`.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// Writes files to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemWriter;

impl DocWriter for FileSystemWriter {
    fn read_existing(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }
}

/// In-memory writer.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, as if it already existed.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Contents of `path`, if written.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// All paths held by the writer, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }
}

impl DocWriter for MemoryWriter {
    fn read_existing(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_writer_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/nested/conf.py");
        let mut writer = FileSystemWriter;

        assert_eq!(writer.read_existing(&path).unwrap(), None);
        writer.write(&path, "project = 'x'\n").unwrap();
        assert_eq!(
            writer.read_existing(&path).unwrap().as_deref(),
            Some("project = 'x'\n")
        );
    }

    #[test]
    fn test_memory_writer() {
        let mut writer = MemoryWriter::new();
        writer.insert("docs/index.rst", "old");
        writer.write(Path::new("docs/conf.py"), "new").unwrap();

        assert_eq!(writer.get("docs/index.rst"), Some("old"));
        assert_eq!(
            writer.read_existing(Path::new("docs/conf.py")).unwrap().as_deref(),
            Some("new")
        );
        let paths: Vec<_> = writer.paths().collect();
        assert_eq!(paths, vec![Path::new("docs/conf.py"), Path::new("docs/index.rst")]);
    }
}
