use serde::{Deserialize, Serialize};

/// Optional per-report defaults read from a YAML file. Command-line flags
/// take precedence over anything set here.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct S2pConfig {
    pub nsg: Option<NsgConfig>,
    pub buckets: Option<OutputConfig>,
    pub flowlogs: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NsgConfig {
    pub min_count: Option<usize>,
    pub wanted_findings: Option<Vec<String>>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub output: Option<String>,
}
