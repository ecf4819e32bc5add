use std::path::Path;
use crate::cli::commands::ReportArgs;
use crate::config::S2pConfig;
use crate::document::load_document;
use crate::errors::S2pError;
use crate::reporting::flowlogs::{vpcs_without_flowlogs, DEFAULT_OUTPUT};
use crate::reporting::write_csv;
use super::resolve_output;
use tracing::info;

pub fn handle_flowlogs(args: ReportArgs, config: &S2pConfig) -> Result<(), S2pError> {
    let configured = config.flowlogs.as_ref().and_then(|f| f.output.clone());
    let output = resolve_output(args.output_name, configured, DEFAULT_OUTPUT);

    info!(input = %args.filepath, "Building VPC flow log report");
    let doc = load_document(Path::new(&args.filepath))?;
    let table = vpcs_without_flowlogs(&doc)?;
    write_csv(Path::new(&output), &table)?;
    Ok(())
}
