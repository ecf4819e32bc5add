use std::collections::HashMap;

/// Cell value marking that a resource is flagged by a finding.
pub const PRESENT_MARKER: &str = "X";

/// Identity of one output row. Ordering is lexicographic over
/// (region, container id, resource id), which is the report row order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub region: String,
    pub container_id: String,
    pub resource_id: String,
}

impl RecordKey {
    pub fn new(region: &str, container_id: &str, resource_id: &str) -> Self {
        Self {
            region: region.to_string(),
            container_id: container_id.to_string(),
            resource_id: resource_id.to_string(),
        }
    }

    pub fn fields(&self) -> [&str; 3] {
        [&self.region, &self.container_id, &self.resource_id]
    }
}

/// One report row: column name to cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputRecord {
    values: HashMap<String, String>,
}

impl OutputRecord {
    /// Start a record with its identity columns filled from `key`.
    pub fn with_identity(columns: [&str; 3], key: &RecordKey) -> Self {
        let mut record = Self::default();
        for (column, value) in columns.iter().zip(key.fields()) {
            record.set(column, value);
        }
        record
    }

    pub fn set(&mut self, column: &str, value: &str) {
        self.values.insert(column.to_string(), value.to_string());
    }

    pub fn mark(&mut self, finding: &str) {
        self.set(finding, PRESENT_MARKER);
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Project onto `columns`, rendering absent cells as empty strings.
    /// Values for columns not listed are dropped.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Vec<String> {
        columns
            .iter()
            .map(|c| self.get(c.as_ref()).unwrap_or_default().to_string())
            .collect()
    }
}
