//! Normalized interaction records and the tabular container handed to the
//! graph builder and the web layer.

use serde_json::{Map, Value};

/// Canonical column name for the first interactor.
pub const PROTEIN_A: &str = "Protein_A";
/// Canonical column name for the second interactor.
pub const PROTEIN_B: &str = "Protein_B";

/// One reported interaction between two proteins.
///
/// `protein_a` / `protein_b` hold the official gene symbols; every other
/// field returned by the upstream API passes through unchanged in `extra`
/// (field order preserved as returned).
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRecord {
    pub protein_a: String,
    pub protein_b: String,
    pub extra: Map<String, Value>,
}

impl InteractionRecord {
    pub fn new(protein_a: impl Into<String>, protein_b: impl Into<String>) -> Self {
        Self {
            protein_a: protein_a.into(),
            protein_b: protein_b.into(),
            extra: Map::new(),
        }
    }

    /// Flat JSON object view of the row, canonical columns first.
    pub fn to_json(&self) -> Value {
        let mut row = Map::new();
        row.insert(PROTEIN_A.to_string(), Value::String(self.protein_a.clone()));
        row.insert(PROTEIN_B.to_string(), Value::String(self.protein_b.clone()));
        for (k, v) in &self.extra {
            row.insert(k.clone(), v.clone());
        }
        Value::Object(row)
    }
}

/// Ordered sequence of interaction records for one query.
///
/// Invariant: every record has non-empty endpoints, or the table is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionTable {
    records: Vec<InteractionRecord>,
}

impl InteractionTable {
    pub fn new(records: Vec<InteractionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InteractionRecord> {
        self.records.iter()
    }

    pub fn push(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }

    /// Column names for display: the canonical pair first, then every extra
    /// column in first-seen order across the rows.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec![PROTEIN_A.to_string(), PROTEIN_B.to_string()];
        for record in &self.records {
            for key in record.extra.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        columns
    }

    /// All rows as flat JSON objects (API output and table rendering).
    pub fn rows_json(&self) -> Vec<Value> {
        self.records.iter().map(InteractionRecord::to_json).collect()
    }
}

impl<'a> IntoIterator for &'a InteractionTable {
    type Item = &'a InteractionRecord;
    type IntoIter = std::slice::Iter<'a, InteractionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
