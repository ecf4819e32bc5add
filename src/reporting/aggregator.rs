use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use serde_json::Value;
use crate::document::path::{expect_array, expect_str, lookup_in};
use crate::document::Document;
use crate::errors::S2pError;
use crate::models::{decode_record_key, OutputRecord, RecordKey};
use tracing::debug;

/// Which finding categories a report includes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WantedFindings {
    /// Every finding present in the collection, in document order.
    #[default]
    All,
    /// An explicit selection, in the order given.
    Named(Vec<String>),
}

impl WantedFindings {
    /// Build a selection from user input. No names means all findings;
    /// repeated names keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.is_empty() {
            WantedFindings::All
        } else {
            WantedFindings::Named(unique)
        }
    }

    pub fn includes(&self, finding: &str) -> bool {
        match self {
            WantedFindings::All => true,
            WantedFindings::Named(names) => names.iter().any(|n| n == finding),
        }
    }

    /// The wanted finding names in column order.
    pub fn resolve(&self, counts: &FindingCounts) -> Vec<String> {
        match self {
            WantedFindings::All => counts.names().map(str::to_string).collect(),
            WantedFindings::Named(names) => names.clone(),
        }
    }
}

/// Item count per finding, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingCounts {
    entries: Vec<(String, usize)>,
}

impl FindingCounts {
    pub fn record(&mut self, finding: &str, count: usize) {
        match self.entries.iter_mut().find(|(name, _)| name == finding) {
            Some((_, existing)) => *existing = count,
            None => self.entries.push((finding.to_string(), count)),
        }
    }

    /// Count for `finding`; findings absent from the document count zero.
    pub fn count(&self, finding: &str) -> usize {
        self.entries
            .iter()
            .find(|(name, _)| name == finding)
            .map_or(0, |(_, count)| *count)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of folding a findings collection into per-resource records.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub counts: FindingCounts,
    /// Wanted finding names in column order, before threshold filtering.
    pub wanted: Vec<String>,
    /// Keyed records; iteration order is the report row order.
    pub records: BTreeMap<RecordKey, OutputRecord>,
}

/// Fold every item of the wanted findings under `collection` into one record
/// per decoded key. Counts are recorded for all findings, wanted or not.
///
/// Aborts on the first item that is not a decodable identifier.
pub fn aggregate_findings(
    doc: &Document,
    collection: &[&str],
    wanted: &WantedFindings,
    identity_columns: [&str; 3],
) -> Result<Aggregation, S2pError> {
    let findings = doc.object(collection)?;
    let prefix = collection.join(".");

    let mut counts = FindingCounts::default();
    let mut records: BTreeMap<RecordKey, OutputRecord> = BTreeMap::new();

    for (finding, data) in findings {
        let items_path = format!("{prefix}.{finding}.items");
        let items = finding_items(data, &prefix, finding)?;
        counts.record(finding, items.len());

        if !wanted.includes(finding) {
            continue;
        }

        for (i, item) in items.iter().enumerate() {
            let identifier = expect_str(item, &format!("{items_path}[{i}]"))?;
            let key = decode_record_key(identifier)?;
            let record = match records.entry(key) {
                Entry::Vacant(e) => {
                    let record = OutputRecord::with_identity(identity_columns, e.key());
                    e.insert(record)
                }
                Entry::Occupied(e) => e.into_mut(),
            };
            record.mark(finding);
        }
        debug!(finding = %finding, items = items.len(), "Aggregated finding");
    }

    let wanted = wanted.resolve(&counts);
    Ok(Aggregation { counts, wanted, records })
}

/// Item counts for every finding under `services.<service>.findings`.
pub fn finding_counts(doc: &Document, service: &str) -> Result<FindingCounts, S2pError> {
    let collection = ["services", service, "findings"];
    let findings = doc.object(&collection)?;
    let prefix = collection.join(".");

    let mut counts = FindingCounts::default();
    for (finding, data) in findings {
        counts.record(finding, finding_items(data, &prefix, finding)?.len());
    }
    Ok(counts)
}

fn finding_items<'a>(data: &'a Value, prefix: &str, finding: &str) -> Result<&'a Vec<Value>, S2pError> {
    let finding_path = format!("{prefix}.{finding}");
    let items = lookup_in(data, &["items"], &finding_path)?;
    expect_array(items, &format!("{finding_path}.items"))
}
