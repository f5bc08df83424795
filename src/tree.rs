//! Document model for parsed configuration data.

use std::collections::BTreeMap;
use std::fmt;

/// A mapping level of a document. Keys iterate in byte-lexicographic order.
pub type Mapping = BTreeMap<String, Document>;

/// A leaf value in a configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// A parsed configuration value: either a scalar leaf or a nested mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Scalar(Scalar),
    Mapping(Mapping),
}

impl Scalar {
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Number(_) => "number",
            Scalar::String(_) => "string",
        }
    }
}

/// Natural text form: `null`, `true`/`false`, decimal numbers without a
/// trailing `.0`, strings unquoted.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => f.write_str(&format_number(*n)),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl Document {
    pub fn type_name(&self) -> &'static str {
        match self {
            Document::Scalar(scalar) => scalar.type_name(),
            Document::Mapping(_) => "mapping",
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(map) => Some(map),
            Document::Scalar(_) => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Document::Mapping(_))
    }
}

impl From<Scalar> for Document {
    fn from(scalar: Scalar) -> Self {
        Document::Scalar(scalar)
    }
}

impl From<Mapping> for Document {
    fn from(map: Mapping) -> Self {
        Document::Mapping(map)
    }
}

/// Formats a number the way configuration literals read: `50`, `0.5`, `-12.25`.
/// Magnitudes of `1e21` and above or below `1e-6` use exponent form (`1e+21`,
/// `1.5e-7`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // -0 and 0 read the same
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}
