use std::path::Path;
use crate::cli::commands::ReportArgs;
use crate::config::S2pConfig;
use crate::document::load_document;
use crate::errors::S2pError;
use crate::reporting::buckets::{buckets_without_logging, DEFAULT_OUTPUT};
use crate::reporting::write_csv;
use super::resolve_output;
use tracing::info;

pub fn handle_buckets(args: ReportArgs, config: &S2pConfig) -> Result<(), S2pError> {
    let configured = config.buckets.as_ref().and_then(|b| b.output.clone());
    let output = resolve_output(args.output_name, configured, DEFAULT_OUTPUT);

    info!(input = %args.filepath, "Building buckets-without-logging report");
    let doc = load_document(Path::new(&args.filepath))?;
    let table = buckets_without_logging(&doc)?;
    write_csv(Path::new(&output), &table)?;
    Ok(())
}
