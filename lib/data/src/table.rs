//! The institution table
//!
//! Thin container around the loaded rows of the merged source. Loading is the
//! engine's only I/O and happens once at startup.

use crate::error::Result;
use crate::record::InstitutionRecord;
use std::path::Path;
use tracing::info;

/// The full merged institutional table, in source row order.
#[derive(Debug, Clone, Default)]
pub struct InstitutionTable {
    records: Vec<InstitutionRecord>,
}

impl InstitutionTable {
    /// Wrap already-loaded records.
    pub fn from_records(records: Vec<InstitutionRecord>) -> Self {
        Self { records }
    }

    /// Load the merged table from a CSV file.
    ///
    /// Columns are matched by exact header name; unknown columns are ignored.
    /// A missing or undecodable required column is a startup error.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: InstitutionRecord = row?;
            records.push(record);
        }

        info!(rows = records.len(), path = %path.display(), "loaded institution table");
        Ok(Self { records })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[InstitutionRecord] {
        &self.records
    }

    #[inline]
    pub fn get(&self, row: usize) -> Option<&InstitutionRecord> {
        self.records.get(row)
    }

    /// Distinct state codes observed in the table, sorted ascending.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| r.state.as_deref())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        states.sort_unstable();
        states.dedup();
        states
    }
}
