//! Output formatting for diff trees.
//!
//! Each output style is a pure function from a [`DiffTree`] to text. The
//! registry here maps a format name to its formatter; unknown names are a
//! configuration error rather than a silent fallback.
//!
//! # Examples
//!
//! ```
//! use gendiff::{compare, parse_json, output};
//!
//! let old = parse_json(r#"{"timeout": 50}"#).unwrap();
//! let new = parse_json(r#"{"timeout": 20}"#).unwrap();
//! let tree = compare(&old, &new).unwrap();
//!
//! let render = output::resolve("plain").unwrap();
//! assert_eq!(render(&tree).unwrap(), "Property 'timeout' was updated. From 50 to 20");
//! ```

mod json;
mod plain;
mod stylish;

use crate::diff::DiffTree;
use crate::error::OutputError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A formatter renders a whole tree into one text style.
pub type Formatter = fn(&DiffTree) -> Result<String, OutputError>;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nested braces with `+`/`-` markers
    #[default]
    Stylish,
    /// One sentence per changed property
    Plain,
    /// Machine-readable JSON encoding of the tree
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Stylish, OutputFormat::Plain, OutputFormat::Json];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Stylish => "stylish",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }

    pub fn formatter(self) -> Formatter {
        match self {
            OutputFormat::Stylish => render_stylish,
            OutputFormat::Plain => render_plain,
            OutputFormat::Json => json::render,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| OutputError::unknown_format(s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn render_stylish(tree: &DiffTree) -> Result<String, OutputError> {
    Ok(stylish::render(tree))
}

fn render_plain(tree: &DiffTree) -> Result<String, OutputError> {
    Ok(plain::render(tree))
}

/// Resolves a format name (`stylish`, `plain` or `json`) to its formatter.
///
/// # Errors
///
/// Returns `OutputError::UnknownFormat` for any other name.
pub fn resolve(name: &str) -> Result<Formatter, OutputError> {
    name.parse::<OutputFormat>().map(OutputFormat::formatter)
}

/// Renders a tree in the given format.
pub fn format_diff(tree: &DiffTree, format: OutputFormat) -> Result<String, OutputError> {
    debug!(%format, nodes = tree.len(), "rendering diff");
    (format.formatter())(tree)
}
