use std::io::Write;
use std::path::Path;
use crate::cli::commands::FindingsArgs;
use crate::document::load_document;
use crate::errors::S2pError;
use crate::reporting::{finding_counts, FindingCounts};
use tracing::{info, warn};

pub fn handle_findings(args: FindingsArgs) -> Result<(), S2pError> {
    let doc = load_document(Path::new(&args.filepath))?;
    let counts = finding_counts(&doc, &args.service)?;
    if counts.is_empty() {
        warn!(service = %args.service, "No findings recorded for service");
    } else {
        info!(service = %args.service, findings = counts.len(), "Listing findings");
    }

    let stdout = std::io::stdout();
    print_counts(&counts, &mut stdout.lock())
}

/// One line per finding: item count, then name, in document order.
pub fn print_counts<W: Write>(counts: &FindingCounts, out: &mut W) -> Result<(), S2pError> {
    let width = counts.iter().map(|(_, c)| c.to_string().len()).max().unwrap_or(1);
    for (name, count) in counts.iter() {
        writeln!(out, "{:>width$}  {}", count, name, width = width)?;
    }
    Ok(())
}
