use super::types::S2pError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl S2pError {
    /// Classify this error into its reporting category and process exit code.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            S2pError::Config(_) | S2pError::Yaml(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            S2pError::FileAccess { .. } => ErrorClassification {
                error_type: "FileAccessError",
                exit_code: 3,
            },
            S2pError::Parse(_) | S2pError::Encoding(_) => ErrorClassification {
                error_type: "ParseError",
                exit_code: 4,
            },
            S2pError::MissingPath(_) => ErrorClassification {
                error_type: "MissingPathError",
                exit_code: 5,
            },
            S2pError::UnexpectedType { .. } => ErrorClassification {
                error_type: "UnexpectedTypeError",
                exit_code: 5,
            },
            S2pError::MalformedIdentifier { .. } => ErrorClassification {
                error_type: "MalformedIdentifierError",
                exit_code: 6,
            },

            // Output encoding failures
            S2pError::Csv(_) => ErrorClassification {
                error_type: "CsvError",
                exit_code: 1,
            },
            S2pError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
        }
    }
}
