use std::path::Path;
use crate::cli::commands::NsgArgs;
use crate::config::S2pConfig;
use crate::document::load_document;
use crate::errors::S2pError;
use crate::reporting::nsg::{network_security_groups, DEFAULT_OUTPUT};
use crate::reporting::{write_csv, WantedFindings};
use super::resolve_output;
use tracing::info;

pub fn handle_nsg(args: NsgArgs, config: &S2pConfig) -> Result<(), S2pError> {
    let defaults = config.nsg.clone().unwrap_or_default();

    let min_count = args.min_count.or(defaults.min_count).unwrap_or(0);
    let wanted = if args.wanted_findings.is_empty() {
        WantedFindings::from_names(defaults.wanted_findings.unwrap_or_default())
    } else {
        WantedFindings::from_names(args.wanted_findings)
    };
    let output = resolve_output(args.output_name, defaults.output, DEFAULT_OUTPUT);

    info!(input = %args.filepath, min_count, "Building network security group report");
    let doc = load_document(Path::new(&args.filepath))?;
    let table = network_security_groups(&doc, &wanted, min_count)?;
    write_csv(Path::new(&output), &table)?;
    Ok(())
}
