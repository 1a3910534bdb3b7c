use std::collections::HashSet;
use std::fmt;

use super::record::{LeadRecord, RawValue};

/// Structural problems with an input table. These abort a run.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    DuplicateColumn(String),
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::DuplicateColumn(name) => write!(f, "Duplicate column '{}'", name),
            DatasetError::RowWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} fields, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for DatasetError {}

/// An ordered table of lead records sharing one column schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<LeadRecord>,
}

impl Dataset {
    /// A dataset with a schema but no rows.
    pub fn with_columns(columns: Vec<String>) -> Result<Self, DatasetError> {
        check_unique(&columns)?;
        Ok(Self {
            columns,
            records: Vec::new(),
        })
    }

    /// Build from a header and positional rows, as read from a file.
    ///
    /// Short rows are padded with missing values. A row with more fields than
    /// the header is an error.
    pub fn from_rows(
        columns: Vec<String>,
        rows: Vec<Vec<RawValue>>,
    ) -> Result<Self, DatasetError> {
        check_unique(&columns)?;

        let mut records = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() < columns.len() {
                row.resize(columns.len(), RawValue::Missing);
            }
            if row.len() > columns.len() {
                return Err(DatasetError::RowWidth {
                    row: i + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            let mut record = LeadRecord::new();
            for (name, value) in columns.iter().zip(row) {
                record.insert(name, value);
            }
            records.push(record);
        }

        Ok(Self { columns, records })
    }

    /// Build from records; the schema is the union of their fields in first-seen order.
    pub fn from_records(records: Vec<LeadRecord>) -> Self {
        let mut dataset = Self::default();
        for record in records {
            dataset.push(record);
        }
        dataset
    }

    // Callers guarantee unique columns and records that only use those columns
    pub(crate) fn from_parts(columns: Vec<String>, records: Vec<LeadRecord>) -> Self {
        Self { columns, records }
    }

    /// Append a record, extending the schema with any fields not seen before.
    pub fn push(&mut self, record: LeadRecord) {
        for name in record.field_names() {
            if !self.columns.iter().any(|c| c == name) {
                self.columns.push(name.to_string());
            }
        }
        self.records.push(record);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[LeadRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn check_unique(columns: &[String]) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for name in columns {
        if !seen.insert(name.as_str()) {
            return Err(DatasetError::DuplicateColumn(name.clone()));
        }
    }
    Ok(())
}
