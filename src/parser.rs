//! Loading JSON and YAML files into documents.
//!
//! The syntax of a file is chosen strictly by its extension: `.json` is parsed
//! as JSON, `.yml` and `.yaml` as YAML. Any other extension is rejected before
//! the file is read.
//!
//! Sequences are outside the document model, so a document containing one is
//! reported as a parse error naming the offending key.
//!
//! # Examples
//!
//! ```no_run
//! use gendiff::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = parse_file(Path::new("config.yaml"))?;
//! assert!(doc.is_mapping());
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::tree::{Document, Mapping, Scalar};
use serde::de::Error as _;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Recognized document syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Json,
    Yaml,
}

impl Syntax {
    /// Detects the syntax from the file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedFormat` for any extension other than
    /// `json`, `yml` or `yaml`, including a missing one.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Syntax::Json),
            Some("yaml") | Some("yml") => Ok(Syntax::Yaml),
            Some(other) => Err(ParseError::unsupported_format(
                path.to_string_lossy().to_string(),
                format!(".{}", other),
            )),
            None => Err(ParseError::unsupported_format(
                path.to_string_lossy().to_string(),
                "",
            )),
        }
    }
}

/// Parses a file into a Document.
///
/// # Errors
///
/// This function will return an error if:
/// - The extension is not recognized (`ParseError::UnsupportedFormat`)
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The content is malformed for its syntax (`ParseError::JsonError` / `ParseError::YamlError`)
pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
    let syntax = Syntax::from_path(path)?;

    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    debug!(path = %path.display(), ?syntax, bytes = content.len(), "parsing document");

    parse_content(&content, syntax, &path.to_string_lossy())
}

/// Parses in-memory content of a known syntax. `origin` names the source in
/// error messages.
pub fn parse_content(content: &str, syntax: Syntax, origin: &str) -> Result<Document, ParseError> {
    match syntax {
        Syntax::Json => parse_json(content).map_err(|e| ParseError::json_error(origin, e)),
        Syntax::Yaml => parse_yaml(content).map_err(|e| ParseError::yaml_error(origin, e)),
    }
}

/// Parses a JSON string into a Document.
///
/// ```
/// use gendiff::parser::parse_json;
///
/// let doc = parse_json(r#"{"host": "hexlet.io", "timeout": 50}"#).unwrap();
/// assert!(doc.is_mapping());
/// ```
pub fn parse_json(content: &str) -> Result<Document, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let mut trail = Vec::new();
    json_to_document(value, &mut trail).map_err(serde_json::Error::custom)
}

/// Parses a YAML string into a Document.
///
/// Merge keys (`<<: *anchor`) are expanded before conversion.
///
/// ```
/// use gendiff::parser::parse_yaml;
///
/// let doc = parse_yaml("host: hexlet.io\ntimeout: 50").unwrap();
/// assert!(doc.is_mapping());
/// ```
pub fn parse_yaml(content: &str) -> Result<Document, serde_yaml::Error> {
    let mut value: serde_yaml::Value = serde_yaml::from_str(content)?;
    value.apply_merge()?;
    let mut trail = Vec::new();
    yaml_to_document(value, &mut trail).map_err(serde_yaml::Error::custom)
}

fn sequence_rejected(trail: &[String]) -> String {
    if trail.is_empty() {
        "sequences are not supported (found at document root)".to_string()
    } else {
        format!("sequences are not supported (found at '{}')", trail.join("."))
    }
}

/// Converts a serde_json::Value, tracking the key trail for error messages.
fn json_to_document(
    value: serde_json::Value,
    trail: &mut Vec<String>,
) -> Result<Document, String> {
    let doc: Document = match value {
        serde_json::Value::Null => Scalar::Null.into(),
        serde_json::Value::Bool(b) => Scalar::Bool(b).into(),
        serde_json::Value::Number(n) => Scalar::Number(n.as_f64().unwrap_or_default()).into(),
        serde_json::Value::String(s) => Scalar::String(s).into(),
        serde_json::Value::Array(_) => return Err(sequence_rejected(trail)),
        serde_json::Value::Object(obj) => {
            let mut map = Mapping::new();
            for (key, value) in obj {
                trail.push(key.clone());
                let child = json_to_document(value, trail)?;
                trail.pop();
                map.insert(key, child);
            }
            Document::Mapping(map)
        }
    };
    Ok(doc)
}

/// Converts a serde_yaml::Value. Non-string keys are stringified and tags are
/// dropped in favor of the tagged value.
fn yaml_to_document(
    value: serde_yaml::Value,
    trail: &mut Vec<String>,
) -> Result<Document, String> {
    let doc: Document = match value {
        serde_yaml::Value::Null => Scalar::Null.into(),
        serde_yaml::Value::Bool(b) => Scalar::Bool(b).into(),
        serde_yaml::Value::Number(n) => Scalar::Number(n.as_f64().unwrap_or_default()).into(),
        serde_yaml::Value::String(s) => Scalar::String(s).into(),
        serde_yaml::Value::Sequence(_) => return Err(sequence_rejected(trail)),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Mapping::new();
            for (key, value) in mapping {
                let key = yaml_key(key, trail)?;
                trail.push(key.clone());
                let child = yaml_to_document(value, trail)?;
                trail.pop();
                map.insert(key, child);
            }
            Document::Mapping(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_document(tagged.value, trail)?,
    };
    Ok(doc)
}

fn yaml_key(key: serde_yaml::Value, trail: &[String]) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value, trail),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
            Err(format!("complex mapping keys are not supported (under '{}')", trail.join(".")))
        }
    }
}
