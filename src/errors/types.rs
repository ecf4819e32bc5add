use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum S2pError {
    #[error("Cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Missing path in document: {0}")]
    MissingPath(String),

    #[error("Malformed identifier '{identifier}': expected at least 7 '.'-delimited fields, found {fields}")]
    MalformedIdentifier { identifier: String, fields: usize },

    #[error("Unexpected value at {path}: expected {expected}")]
    UnexpectedType { path: String, expected: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl S2pError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        S2pError::FileAccess { path: path.into(), source }
    }
}
