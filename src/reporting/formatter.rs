use super::aggregator::{Aggregation, FindingCounts};
use tracing::info;

/// A rendered report: header row plus data rows, all cells as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }
}

/// Wanted findings whose total item count reaches `min_count`, in wanted order.
pub fn retained_findings(counts: &FindingCounts, wanted: &[String], min_count: usize) -> Vec<String> {
    wanted
        .iter()
        .filter(|finding| counts.count(finding) >= min_count)
        .cloned()
        .collect()
}

/// Project aggregated records onto identity columns followed by the retained
/// finding columns. Rows come out sorted by record key.
pub fn build_table(aggregation: &Aggregation, identity_columns: [&str; 3], min_count: usize) -> Table {
    let retained = retained_findings(&aggregation.counts, &aggregation.wanted, min_count);

    let dropped: Vec<&str> = aggregation
        .wanted
        .iter()
        .filter(|f| !retained.contains(f))
        .map(String::as_str)
        .collect();
    if !dropped.is_empty() {
        info!(min_count, dropped = ?dropped, "Dropped findings below minimum count");
    }

    let mut columns: Vec<String> = identity_columns.iter().map(|c| c.to_string()).collect();
    columns.extend(retained);

    let mut table = Table::new(columns.iter().cloned());
    for record in aggregation.records.values() {
        table.push_row(record.project(&columns));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::reporting::aggregator::{aggregate_findings, WantedFindings};
    use serde_json::json;

    const COLUMNS: [&str; 3] = ["region", "vpc-id", "security-group-id"];
    const COLLECTION: [&str; 3] = ["services", "ec2", "findings"];

    fn aggregate(findings: serde_json::Value, wanted: &WantedFindings) -> Aggregation {
        let doc = Document::new(json!({ "services": { "ec2": { "findings": findings } } }));
        aggregate_findings(&doc, &COLLECTION, wanted, COLUMNS).unwrap()
    }

    fn counts(entries: &[(&str, usize)]) -> FindingCounts {
        let mut counts = FindingCounts::default();
        for (name, count) in entries {
            counts.record(name, *count);
        }
        counts
    }

    #[test]
    fn test_retained_respects_threshold() {
        let counts = counts(&[("a", 0), ("b", 1), ("c", 5)]);
        let wanted = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(retained_findings(&counts, &wanted, 0), vec!["a", "b", "c"]);
        assert_eq!(retained_findings(&counts, &wanted, 1), vec!["b", "c"]);
        assert_eq!(retained_findings(&counts, &wanted, 2), vec!["c"]);
        assert!(retained_findings(&counts, &wanted, 6).is_empty());
    }

    #[test]
    fn test_absent_wanted_finding_counts_zero() {
        let counts = counts(&[("a", 3)]);
        let wanted = vec!["ghost".to_string(), "a".to_string()];
        assert_eq!(retained_findings(&counts, &wanted, 0), vec!["ghost", "a"]);
        assert_eq!(retained_findings(&counts, &wanted, 1), vec!["a"]);
    }

    #[test]
    fn test_columns_follow_wanted_order() {
        let agg = aggregate(
            json!({
                "a": { "items": ["ec2.r.us-east-1.v.vpc-1.s.sg-1"] },
                "b": { "items": ["ec2.r.us-east-1.v.vpc-1.s.sg-1"] }
            }),
            &WantedFindings::from_names(["b", "a"]),
        );
        let table = build_table(&agg, COLUMNS, 0);
        assert_eq!(table.headers, vec!["region", "vpc-id", "security-group-id", "b", "a"]);
    }

    #[test]
    fn test_rows_sorted_by_key() {
        let agg = aggregate(
            json!({
                "a": { "items": [
                    "ec2.r.us-west-2.v.vpc-1.s.sg-1",
                    "ec2.r.us-east-1.v.vpc-2.s.sg-1",
                    "ec2.r.us-east-1.v.vpc-1.s.sg-2"
                ] }
            }),
            &WantedFindings::All,
        );
        let table = build_table(&agg, COLUMNS, 0);
        let keys: Vec<(&str, &str, &str)> = table
            .rows
            .iter()
            .map(|r| (r[0].as_str(), r[1].as_str(), r[2].as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("us-east-1", "vpc-1", "sg-2"),
                ("us-east-1", "vpc-2", "sg-1"),
                ("us-west-2", "vpc-1", "sg-1"),
            ]
        );
    }

    #[test]
    fn test_dropped_finding_marks_not_emitted() {
        let agg = aggregate(
            json!({
                "rare": { "items": ["ec2.r.us-east-1.v.vpc-1.s.sg-1"] },
                "common": { "items": [
                    "ec2.r.us-east-1.v.vpc-1.s.sg-2",
                    "ec2.r.us-east-1.v.vpc-1.s.sg-3"
                ] }
            }),
            &WantedFindings::All,
        );
        let table = build_table(&agg, COLUMNS, 2);
        assert_eq!(table.headers, vec!["region", "vpc-id", "security-group-id", "common"]);
        // The record flagged only by the dropped finding still has a row
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0], vec!["us-east-1", "vpc-1", "sg-1", ""]);
        assert_eq!(table.rows[1], vec!["us-east-1", "vpc-1", "sg-2", "X"]);
    }
}
