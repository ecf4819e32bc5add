use crate::document::path::{expect_array, expect_str};
use crate::document::Document;
use crate::errors::S2pError;
use crate::models::decode_record_key;
use super::formatter::Table;

pub const DEFAULT_OUTPUT: &str = "vpc_without_flowlogs_enabled.csv";
pub const COLUMNS: [&str; 3] = ["Region", "VPC", "Subnet"];
const FLOW_LOG_ITEMS: [&str; 5] = ["services", "vpc", "findings", "vpc-subnet-without-flow-log", "items"];

/// One row per subnet flagged without flow logs, in item order.
pub fn vpcs_without_flowlogs(doc: &Document) -> Result<Table, S2pError> {
    let items_path = FLOW_LOG_ITEMS.join(".");
    let items = expect_array(doc.lookup(&FLOW_LOG_ITEMS)?, &items_path)?;

    let mut table = Table::new(COLUMNS);
    for (i, item) in items.iter().enumerate() {
        let identifier = expect_str(item, &format!("{items_path}[{i}]"))?;
        let key = decode_record_key(identifier)?;
        table.push_row(key.fields());
    }
    Ok(table)
}
