use std::path::Path;
use crate::errors::S2pError;
use super::types::S2pConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub fn parse_config(path: &Path) -> Result<S2pConfig, S2pError> {
    if !path.exists() {
        return Err(S2pError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = std::fs::metadata(path).map_err(|e| S2pError::file_access(path, e))?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(S2pError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| S2pError::file_access(path, e))?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<S2pConfig, S2pError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty file is an empty config
    if yaml.is_null() {
        return Ok(S2pConfig::default());
    }

    validate_schema(&yaml)?;

    let config: S2pConfig = serde_yaml::from_value(yaml)?;
    validate_semantics(&config)?;
    Ok(config)
}

/// Check the config against the JSON schema. Violations are logged, not fatal;
/// typed deserialization decides what is actually rejected.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), S2pError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| S2pError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| S2pError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

fn validate_semantics(config: &S2pConfig) -> Result<(), S2pError> {
    let wanted = config.nsg.as_ref().and_then(|n| n.wanted_findings.as_ref());
    if let Some(names) = wanted {
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(S2pError::Config("nsg.wanted_findings contains an empty finding name".into()));
        }
    }

    let outputs = [
        ("nsg.output", config.nsg.as_ref().and_then(|n| n.output.as_ref())),
        ("buckets.output", config.buckets.as_ref().and_then(|b| b.output.as_ref())),
        ("flowlogs.output", config.flowlogs.as_ref().and_then(|f| f.output.as_ref())),
    ];
    for (key, output) in outputs {
        if output.is_some_and(|o| o.trim().is_empty()) {
            return Err(S2pError::Config(format!("{} must not be empty", key)));
        }
    }

    Ok(())
}
