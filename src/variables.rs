//! Variables files
//!
//! A variables file is TOML with a `[variables]` table and optional
//! `[metadata]` and `[render]` sections:
//!
//! ```toml
//! [metadata]
//! name = "greeting"
//!
//! [render]
//! mode = "sequential"
//!
//! [variables]
//! name = "John Doe"
//! visits = 3
//! ```
//!
//! Scalars are converted to text when loaded. Arrays and tables are rejected.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::template::{RenderConfig, Renderer, SubstitutionMode, VariableStore};

/// Errors that can occur when loading or parsing variables files
#[derive(Error, Debug)]
pub enum VariablesError {
    #[error("Failed to read variables file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse variables TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unsupported value for variable '{name}': {kind} cannot be converted to text")]
    UnsupportedValue { name: String, kind: &'static str },
    #[error("Invalid render mode: {0}")]
    InvalidMode(String),
}

/// A named set of variables loaded from TOML
#[derive(Debug, Clone, Default)]
pub struct VariableFile {
    /// Optional name for the set
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Substitution strategy requested by the file, if any
    pub mode: Option<SubstitutionMode>,
    /// Variables in file order
    pub variables: VariableStore,
}

#[derive(Deserialize)]
struct TomlVariableFile {
    metadata: Option<TomlMetadata>,
    render: Option<TomlRender>,
    #[serde(default)]
    variables: toml::Table,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlRender {
    mode: Option<String>,
}

impl VariableFile {
    /// Load variables from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, VariablesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load variables from a TOML string
    pub fn from_str(content: &str) -> Result<Self, VariablesError> {
        let parsed: TomlVariableFile = toml::from_str(content)?;

        let mode = parsed
            .render
            .and_then(|r| r.mode)
            .map(|mode| mode.parse::<SubstitutionMode>())
            .transpose()
            .map_err(VariablesError::InvalidMode)?;

        let mut variables = VariableStore::new();
        for (name, value) in parsed.variables {
            let text = value_to_text(&name, value)?;
            variables.set(name, text);
        }

        Ok(VariableFile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            mode,
            variables,
        })
    }

    /// Build a renderer preloaded with these variables
    pub fn into_renderer(self) -> Renderer {
        let config = RenderConfig::new().with_mode(self.mode.unwrap_or_default());
        let mut renderer = Renderer::with_config(config);
        renderer.extend(self.variables.iter());
        renderer
    }
}

fn value_to_text(name: &str, value: toml::Value) -> Result<String, VariablesError> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        toml::Value::Array(_) => Err(VariablesError::UnsupportedValue {
            name: name.to_string(),
            kind: "array",
        }),
        toml::Value::Table(_) => Err(VariablesError::UnsupportedValue {
            name: name.to_string(),
            kind: "table",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;

    #[test]
    fn test_parse_with_metadata() {
        let toml_str = r#"
[metadata]
name = "Greeting"
description = "Variables for the greeting"

[variables]
name = "John Doe"
"#;
        let file = VariableFile::from_str(toml_str).expect("Should parse");
        assert_eq!(file.name, Some("Greeting".to_string()));
        assert_eq!(file.description, Some("Variables for the greeting".to_string()));
        assert_eq!(file.mode, None);
        assert_eq!(file.variables.get("name"), Some("John Doe"));
    }

    #[test]
    fn test_scalars_converted_to_text() {
        let toml_str = r#"
[variables]
count = 3
ratio = 1.5
enabled = true
when = 2024-05-01
"#;
        let file = VariableFile::from_str(toml_str).expect("Should parse");
        assert_eq!(file.variables.get("count"), Some("3"));
        assert_eq!(file.variables.get("ratio"), Some("1.5"));
        assert_eq!(file.variables.get("enabled"), Some("true"));
        assert_eq!(file.variables.get("when"), Some("2024-05-01"));
    }

    #[test]
    fn test_file_order_preserved() {
        let toml_str = r#"
[variables]
zeta = "1"
alpha = "2"
mid = "3"
"#;
        let file = VariableFile::from_str(toml_str).expect("Should parse");
        assert_eq!(file.variables.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_missing_variables_table_is_empty() {
        let file = VariableFile::from_str("").expect("Should parse");
        assert!(file.variables.is_empty());
    }

    #[test]
    fn test_array_rejected() {
        let result = VariableFile::from_str("[variables]\nlist = [1, 2]\n");
        assert!(matches!(
            result,
            Err(VariablesError::UnsupportedValue { ref name, kind: "array" }) if name == "list"
        ));
    }

    #[test]
    fn test_table_rejected() {
        let result = VariableFile::from_str("[variables.nested]\nkey = 1\n");
        assert!(matches!(
            result,
            Err(VariablesError::UnsupportedValue { kind: "table", .. })
        ));
    }

    #[test]
    fn test_render_mode() {
        let file =
            VariableFile::from_str("[render]\nmode = \"sequential\"\n").expect("Should parse");
        assert_eq!(file.mode, Some(SubstitutionMode::Sequential));

        let result = VariableFile::from_str("[render]\nmode = \"twice\"\n");
        assert!(matches!(result, Err(VariablesError::InvalidMode(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = VariableFile::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(VariablesError::ParseError(_))));
    }

    #[test]
    fn test_into_renderer() {
        let toml_str = r#"
[render]
mode = "sequential"

[variables]
outer = "<{inner}>"
inner = "deep"
"#;
        let renderer = VariableFile::from_str(toml_str).expect("Should parse").into_renderer();
        assert_eq!(renderer.config().mode, SubstitutionMode::Sequential);
        assert_eq!(renderer.render("{outer}"), "<deep>");
    }
}
