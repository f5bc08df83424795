//! gendiff - structural diff for configuration files.
//!
//! Two JSON or YAML documents are compared key by key into an ordered diff
//! tree, which is then rendered as a nested "stylish" view, a sentence per
//! change ("plain"), or a machine-readable JSON encoding.
//!
//! # Example
//!
//! ```no_run
//! use gendiff::{compare, format_diff, parse_file, OutputFormat};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let old = parse_file(Path::new("file1.json"))?;
//! let new = parse_file(Path::new("file2.yaml"))?;
//!
//! let tree = compare(&old, &new)?;
//! let output = format_diff(&tree, OutputFormat::Stylish)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod output;
pub mod parser;
pub mod tree;

use std::path::Path;

// Re-export commonly used types for convenience
pub use diff::{compare, compare_mappings, flatten, DiffNode, DiffStats, DiffTree, Payload, Status};
pub use error::{DiffError, GendiffError, OutputError, ParseError};
pub use output::{format_diff, resolve, Formatter, OutputFormat};
pub use parser::{parse_content, parse_file, parse_json, parse_yaml, Syntax};
pub use tree::{Document, Mapping, Scalar};

/// Loads two files, compares them and renders the result in the named format.
///
/// The format name is resolved before either file is read, so an unknown
/// format fails without touching the filesystem.
pub fn gen_diff(
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
    format_name: &str,
) -> Result<String, GendiffError> {
    let format: OutputFormat = format_name.parse()?;
    let old = parse_file(path1.as_ref())?;
    let new = parse_file(path2.as_ref())?;
    let tree = compare(&old, &new)?;
    Ok(format_diff(&tree, format)?)
}
