use std::path::Path;
use crate::errors::S2pError;
use super::path::Document;
use tracing::debug;

/// Assignment header Scout2 writes in front of the JSON body of `aws_config.js`.
pub const AWS_INFO_PREFIX: &str = "aws_info =";

/// Read and parse a Scout2 results file. The whole file is held in memory.
pub fn load_document(path: &Path) -> Result<Document, S2pError> {
    let bytes = std::fs::read(path).map_err(|e| S2pError::file_access(path, e))?;
    let content = String::from_utf8(bytes)?;
    debug!(path = %path.display(), bytes = content.len(), "Read Scout2 results file");
    parse_document(&content)
}

/// Strip the `aws_info =` header line, if present, and parse the remainder.
pub fn parse_document(raw: &str) -> Result<Document, S2pError> {
    let body = strip_prefix(raw);
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(Document::new(value))
}

fn strip_prefix(raw: &str) -> &str {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    raw.strip_prefix(AWS_INFO_PREFIX).unwrap_or(raw)
}
