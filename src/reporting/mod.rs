pub mod aggregator;
pub mod formatter;
pub mod writer;
pub mod nsg;
pub mod buckets;
pub mod flowlogs;

pub use aggregator::{aggregate_findings, finding_counts, Aggregation, FindingCounts, WantedFindings};
pub use formatter::{build_table, retained_findings, Table};
pub use writer::{render_csv, write_csv};
