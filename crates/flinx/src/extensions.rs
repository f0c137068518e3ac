// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Sphinx extension selection.
//!
//! The final extension list is built in two passes:
//!
//! 1. **Declared** extensions from the `extensions` key (default: `autodoc`).
//!    Built-in short names such as `napoleon` expand to `sphinx.ext.napoleon`;
//!    anything else is passed through verbatim.
//! 2. **Inferred** extensions from the other configuration keys. The part of a
//!    key before its first underscore names the extension it configures, so
//!    setting `todo_include_todos` enables `sphinx.ext.todo`.
//!
//! Inferred extensions are appended in order of their short name and never
//! displace or duplicate a declared one.
//!
//! # Example
//!
//! ```
//! use flinx::extensions::infer_extensions;
//!
//! let declared = vec!["autodoc".to_string()];
//! let exts = infer_extensions(Some(declared.as_slice()), ["image_format", "verbose"]);
//! assert_eq!(exts, vec!["sphinx.ext.autodoc", "sphinx.ext.imgconverter"]);
//! ```

use crate::config::Configuration;
use crate::error::Result;
use std::collections::BTreeSet;

/// Namespace of Sphinx's bundled extensions.
pub const EXTENSION_NAMESPACE: &str = "sphinx.ext.";

/// Configuration key holding the declared extension list.
pub const EXTENSIONS_KEY: &str = "extensions";

/// Short names accepted for `sphinx.ext.*` extensions.
pub static BUILTIN_EXTENSIONS: &[&str] = &[
    "autodoc",
    "autosectionlabel",
    "autosummary",
    "coverage",
    "doctest",
    "extlinks",
    "githubpages",
    "graphviz",
    "ifconfig",
    "imgconverter",
    "imgmath",
    "mathjax",
    "jsmith",
    "inheritance_diagram",
    "intersphinx",
    "linkcode",
    "napoleon",
    "todo",
    "viewcode",
];

/// Key prefixes that imply an extension with a different name.
///
/// `image_*` settings belong to `imgconverter`. The `inheritance` entry names
/// `inheritance_graph`, which is not a built-in short name, so `inheritance_*`
/// keys infer nothing.
pub static PREFIX_ALIASES: &[(&str, &str)] = &[
    ("image", "imgconverter"),
    ("inheritance", "inheritance_graph"),
];

/// Extensions used when the configuration declares none.
pub static DEFAULT_EXTENSIONS: &[&str] = &["autodoc"];

/// Returns true if `name` is a built-in extension short name.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_EXTENSIONS.contains(&name)
}

/// Expands a built-in short name to its qualified form; other names are
/// returned unchanged.
pub fn qualify(name: &str) -> String {
    if is_builtin(name) {
        format!("{EXTENSION_NAMESPACE}{name}")
    } else {
        name.to_string()
    }
}

/// The part of a configuration key before its first underscore.
///
/// Keys without an underscore have no prefix.
pub fn key_prefix(key: &str) -> Option<&str> {
    key.split_once('_').map(|(prefix, _)| prefix)
}

/// Maps a key prefix to the extension short name it implies.
pub fn alias_for_prefix(prefix: &str) -> &str {
    PREFIX_ALIASES
        .iter()
        .find(|(from, _)| *from == prefix)
        .map_or(prefix, |(_, to)| to)
}

/// Computes the ordered, duplicate-free extension list.
///
/// `declared` is the user's `extensions` list (`None` selects
/// [`DEFAULT_EXTENSIONS`]); `keys` are the configuration keys used as
/// inference signals. The `extensions` key itself is ignored if present.
pub fn infer_extensions<'a, S, I>(declared: Option<&[S]>, keys: I) -> Vec<String>
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'a str>,
{
    let seeds: Vec<String> = match declared {
        Some(names) => names.iter().map(|name| qualify(name.as_ref())).collect(),
        None => DEFAULT_EXTENSIONS.iter().map(|name| qualify(name)).collect(),
    };
    let mut extensions: Vec<String> = Vec::with_capacity(seeds.len());
    for ext in seeds {
        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }

    let prefixes: BTreeSet<&str> = keys
        .into_iter()
        .filter(|key| *key != EXTENSIONS_KEY)
        .filter_map(key_prefix)
        .collect();

    // BTreeSet orders candidates by short name.
    let inferred: BTreeSet<&str> = prefixes
        .into_iter()
        .map(alias_for_prefix)
        .filter(|name| is_builtin(name))
        .collect();

    for name in inferred {
        let qualified = qualify(name);
        if !extensions.contains(&qualified) {
            tracing::debug!("Enabling {} inferred from configuration keys", qualified);
            extensions.push(qualified);
        }
    }

    extensions
}

/// Resolves the extension list for a configuration.
///
/// # Errors
///
/// Fails only if the `extensions` value is not an array of strings.
pub fn resolve_extensions(config: &Configuration) -> Result<Vec<String>> {
    let declared = config.declared_extensions()?;
    Ok(infer_extensions(declared.as_deref(), config.keys()))
}
