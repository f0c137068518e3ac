// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Custom Tera filters for the documentation templates.

use crate::python;
use std::collections::HashMap;
use tera::{Result, Value};

/// Path from the generated docs directory back to the project root.
pub const PROJECT_RELPATH: &str = "..";

/// `{{ value | repr }}`: the value as a Python literal.
pub fn repr(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(python::repr(value)))
}

/// `{{ path | project_rel }}`: a project-relative path as seen from the docs
/// directory.
pub fn project_rel(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let path = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("project_rel filter expects a string"))?;
    let path = path.replace('\\', "/");
    Ok(Value::String(format!(
        "{}/{}",
        PROJECT_RELPATH,
        path.trim_start_matches("./")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply(filter: fn(&Value, &HashMap<String, Value>) -> Result<Value>, input: Value) -> String {
        let args = HashMap::new();
        filter(&input, &args).unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_repr() {
        assert_eq!(apply(repr, json!("index")), "'index'");
        assert_eq!(apply(repr, json!([".rst"])), "['.rst']");
    }

    #[test]
    fn test_project_rel() {
        assert_eq!(apply(project_rel, json!("README.rst")), "../README.rst");
        assert_eq!(apply(project_rel, json!("./docs/intro.md")), "../docs/intro.md");
    }

    #[test]
    fn test_project_rel_rejects_non_string() {
        let args = HashMap::new();
        assert!(project_rel(&json!(3), &args).is_err());
    }
}
