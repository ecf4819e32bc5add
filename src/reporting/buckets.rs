use crate::document::path::{expect_str, lookup_in};
use crate::document::Document;
use crate::errors::S2pError;
use super::formatter::Table;
use tracing::debug;

pub const DEFAULT_OUTPUT: &str = "buckets_without_logging.csv";
pub const COLUMNS: [&str; 3] = ["Id", "Name", "Region"];
const LOGGING_DISABLED: &str = "Disabled";

/// One row per S3 bucket whose `logging` field is exactly "Disabled",
/// in document order.
pub fn buckets_without_logging(doc: &Document) -> Result<Table, S2pError> {
    let buckets = doc.object(&["services", "s3", "buckets"])?;
    let mut table = Table::new(COLUMNS);

    for (bucket_key, data) in buckets {
        let bucket_path = format!("services.s3.buckets.{bucket_key}");
        let logging = lookup_in(data, &["logging"], &bucket_path)?;
        if logging.as_str() != Some(LOGGING_DISABLED) {
            continue;
        }

        let mut row = Vec::with_capacity(COLUMNS.len());
        for field in ["id", "name", "region"] {
            let value = lookup_in(data, &[field], &bucket_path)?;
            row.push(expect_str(value, &format!("{bucket_path}.{field}"))?.to_string());
        }
        debug!(bucket = %bucket_key, "Bucket has logging disabled");
        table.push_row(row);
    }
    Ok(table)
}
