//! Custom error types for gendiff.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported file format '{extension}' for {path} (expected .json, .yml or .yaml)")]
    UnsupportedFormat { path: String, extension: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("Cannot compare documents: {side} document is a {found}, expected a mapping")]
    InvalidInputKind { side: &'static str, found: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Unknown output format: {format} (expected stylish, plain or json)")]
    UnknownFormat { format: String },

    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum GendiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    pub fn yaml_error(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlError {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported_format(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            extension: extension.into(),
        }
    }
}

impl OutputError {
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat {
            format: format.into(),
        }
    }
}
