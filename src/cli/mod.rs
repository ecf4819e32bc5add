pub mod commands;
pub mod nsg;
pub mod buckets;
pub mod flowlogs;
pub mod findings;
pub mod validate;

pub use commands::{Cli, Commands};

use std::path::Path;
use crate::config::{parse_config, S2pConfig};
use crate::errors::S2pError;

/// Load the `--config` file when one was given, otherwise an empty config.
pub fn load_config(path: Option<&str>) -> Result<S2pConfig, S2pError> {
    match path {
        Some(p) => parse_config(Path::new(p)),
        None => Ok(S2pConfig::default()),
    }
}

/// Pick the output path: flag, then config, then the report's default name.
pub(crate) fn resolve_output(flag: Option<String>, configured: Option<String>, default: &str) -> String {
    flag.or(configured).unwrap_or_else(|| default.to_string())
}
