//! Network security group report: EC2 findings folded into one row per
//! security group, one column per retained finding.

use crate::document::Document;
use crate::errors::S2pError;
use super::aggregator::{aggregate_findings, WantedFindings};
use super::formatter::{build_table, Table};
use tracing::info;

pub const DEFAULT_OUTPUT: &str = "network_security_groups.csv";
pub const IDENTITY_COLUMNS: [&str; 3] = ["region", "vpc-id", "security-group-id"];
const EC2_FINDINGS: [&str; 3] = ["services", "ec2", "findings"];

pub fn network_security_groups(
    doc: &Document,
    wanted: &WantedFindings,
    min_count: usize,
) -> Result<Table, S2pError> {
    let aggregation = aggregate_findings(doc, &EC2_FINDINGS, wanted, IDENTITY_COLUMNS)?;
    info!(
        findings = aggregation.counts.len(),
        security_groups = aggregation.records.len(),
        "Aggregated EC2 findings"
    );
    Ok(build_table(&aggregation, IDENTITY_COLUMNS, min_count))
}
