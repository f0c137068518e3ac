// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Tera-based rendering of `conf.py` and `index.rst`.
//!
//! Both templates are compiled into the crate. Two filters are registered:
//! `repr` (Python literal) and `project_rel` (path relative to the docs
//! directory).

pub mod filters;

use crate::config::Configuration;
use crate::error::Result;
use crate::metadata::ProjectMetadata;
use crate::python::toml_to_json;
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};

const CONF_TEMPLATE: &str = "conf.py";
const INDEX_TEMPLATE: &str = "index.rst";

/// Master document basename.
pub const MASTER_BASENAME: &str = "index";

/// Source file suffixes Sphinx reads.
pub const SOURCE_SUFFIXES: &[&str] = &[".rst"];

/// Everything the templates need.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Inferred project metadata.
    pub metadata: &'a ProjectMetadata,
    /// Final configuration, `extensions` already resolved.
    pub configuration: &'a Configuration,
    /// Year used in the copyright line.
    pub copyright_year: i32,
    /// Banner identifying generated files; `None` when ejecting.
    pub generated_text: Option<&'a str>,
}

#[derive(Serialize)]
struct ConfigEntry<'a> {
    key: &'a str,
    value: serde_json::Value,
}

/// Renders the documentation templates.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Loads the embedded templates and registers the custom filters.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (CONF_TEMPLATE, include_str!("../../templates/conf.py.tera")),
            (INDEX_TEMPLATE, include_str!("../../templates/index.rst.tera")),
        ])?;
        tera.register_filter("repr", filters::repr);
        tera.register_filter("project_rel", filters::project_rel);
        Ok(Self { tera })
    }

    /// Renders `index.rst`.
    pub fn render_index(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let module_name = &ctx.metadata.module;
        let mut context = Context::new();
        context.insert("module_name", module_name);
        context.insert("title_rule", &"=".repeat(module_name.chars().count()));
        context.insert("generated_text", &ctx.generated_text);
        context.insert(
            "readme",
            &ctx.metadata.readme.as_ref().map(|p| p.to_string_lossy().into_owned()),
        );
        context.insert(
            "readme_is_rst",
            &ctx.metadata.readme.as_deref().map_or(true, is_rst),
        );
        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }

    /// Renders `conf.py`.
    pub fn render_conf(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let metadata = ctx.metadata;
        let config: Vec<ConfigEntry<'_>> = ctx
            .configuration
            .iter()
            .map(|(key, value)| ConfigEntry {
                key,
                value: toml_to_json(value),
            })
            .collect();

        let mut context = Context::new();
        context.insert("module_path", filters::PROJECT_RELPATH);
        context.insert("project", &metadata.module);
        context.insert(
            "copyright",
            &format!("{}, {}", ctx.copyright_year, metadata.author),
        );
        context.insert("author", &metadata.author);
        context.insert("version", &metadata.version);
        context.insert("source_suffix", SOURCE_SUFFIXES);
        context.insert("master_basename", MASTER_BASENAME);
        context.insert("generated_text", &ctx.generated_text);
        context.insert("config", &config);
        Ok(self.tera.render(CONF_TEMPLATE, &context)?)
    }
}

fn is_rst(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("rst") | Some("rest")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn metadata(readme: Option<&str>) -> ProjectMetadata {
        ProjectMetadata {
            module: "demo_pkg".to_string(),
            author: "Jane Doe".to_string(),
            version: "1.0".to_string(),
            readme: readme.map(PathBuf::from),
        }
    }

    fn configuration(text: &str) -> Configuration {
        Configuration::new(text.parse::<toml::Table>().unwrap())
    }

    #[test]
    fn test_render_conf() {
        let engine = TemplateEngine::new().unwrap();
        let metadata = metadata(None);
        let configuration = configuration(
            "html_theme = \"alabaster\"\nextensions = [\"sphinx.ext.autodoc\"]\ntodo_include_todos = true\n",
        );
        let conf = engine
            .render_conf(&RenderContext {
                metadata: &metadata,
                configuration: &configuration,
                copyright_year: 2018,
                generated_text: Some("GENERATED"),
            })
            .unwrap();

        assert!(conf.starts_with("# GENERATED\n"));
        assert!(conf.contains("sys.path.insert(0, os.path.abspath('..'))"));
        assert!(conf.contains("project = 'demo_pkg'\n"));
        assert!(conf.contains("copyright = '2018, Jane Doe'\n"));
        assert!(conf.contains("author = 'Jane Doe'\n"));
        assert!(conf.contains("version = '1.0'\n"));
        assert!(conf.contains("source_suffix = ['.rst']\n"));
        assert!(conf.contains("master_doc = 'index'\n"));

        let theme = conf.find("html_theme = 'alabaster'\n").unwrap();
        let exts = conf.find("extensions = ['sphinx.ext.autodoc']\n").unwrap();
        let todos = conf.find("todo_include_todos = True\n").unwrap();
        assert!(theme < exts && exts < todos);
    }

    #[test]
    fn test_render_conf_without_banner() {
        let engine = TemplateEngine::new().unwrap();
        let metadata = metadata(None);
        let configuration = configuration("extensions = []");
        let conf = engine
            .render_conf(&RenderContext {
                metadata: &metadata,
                configuration: &configuration,
                copyright_year: 2024,
                generated_text: None,
            })
            .unwrap();
        assert!(conf.starts_with("# Configuration file for the Sphinx documentation builder."));
        assert!(conf.contains("extensions = []\n"));
    }

    #[test]
    fn test_render_index_with_rst_readme() {
        let engine = TemplateEngine::new().unwrap();
        let metadata = metadata(Some("README.rst"));
        let configuration = Configuration::default();
        let index = engine
            .render_index(&RenderContext {
                metadata: &metadata,
                configuration: &configuration,
                copyright_year: 2024,
                generated_text: Some("GENERATED"),
            })
            .unwrap();

        assert!(index.starts_with(".. GENERATED\n"));
        assert!(index.contains(".. include:: ../README.rst\n"));
        assert!(!index.contains(":literal:"));
        assert!(index.contains(".. automodule:: demo_pkg\n   :members:"));
    }

    #[test]
    fn test_render_index_with_markdown_readme() {
        let engine = TemplateEngine::new().unwrap();
        let metadata = metadata(Some("README.md"));
        let configuration = Configuration::default();
        let index = engine
            .render_index(&RenderContext {
                metadata: &metadata,
                configuration: &configuration,
                copyright_year: 2024,
                generated_text: None,
            })
            .unwrap();

        assert!(index.starts_with(".. include:: ../README.md\n   :literal:\n"));
    }

    #[test]
    fn test_render_index_without_readme() {
        let engine = TemplateEngine::new().unwrap();
        let metadata = metadata(None);
        let configuration = Configuration::default();
        let index = engine
            .render_index(&RenderContext {
                metadata: &metadata,
                configuration: &configuration,
                copyright_year: 2024,
                generated_text: None,
            })
            .unwrap();

        assert!(index.starts_with("demo_pkg\n========\n"));
        assert!(index.contains(".. automodule:: demo_pkg"));
    }
}
