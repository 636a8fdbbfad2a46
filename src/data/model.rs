use std::fmt;

use crate::errors::{FilterError, Result};

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single data row.
///
/// Each cell is an explicit optional string: `None` means the field was
/// absent from the source row, `Some("")` means it was present but empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub cells: Vec<Option<String>>,
}

impl Record {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Record { cells }
    }

    /// Cell at `idx`, `None` when missing.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).and_then(|c| c.as_deref())
    }

    /// A cell holds a value when it is present and not the empty string.
    /// Whitespace or tokens such as `NA` count as values.
    pub fn has_value(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(v) if !v.is_empty())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match cell {
                Some(v) => write!(f, "{v}")?,
                None => write!(f, "<null>")?,
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table: header plus rows, in file order.
///
/// Every record has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Column names in file order.
    pub headers: Vec<String>,
    /// All data rows.
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { headers, records }
    }

    /// Position of `column` in the header.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| FilterError::ColumnNotFound {
                column: column.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[Option<&str>]) -> Record {
        Record::new(values.iter().map(|v| v.map(str::to_string)).collect())
    }

    #[test]
    fn has_value_distinguishes_missing_empty_and_present() {
        let rec = cells(&[Some("1"), Some(""), None, Some(" "), Some("NA")]);
        assert!(rec.has_value(0));
        assert!(!rec.has_value(1));
        assert!(!rec.has_value(2));
        assert!(rec.has_value(3));
        assert!(rec.has_value(4));
        // Out of range behaves like a missing cell.
        assert!(!rec.has_value(5));
    }

    #[test]
    fn column_index_reports_available_columns() {
        let ds = Dataset::new(vec!["id".into(), "subject_id".into()], vec![]);
        assert_eq!(ds.column_index("subject_id").unwrap(), 1);

        match ds.column_index("missing") {
            Err(FilterError::ColumnNotFound { column, available }) => {
                assert_eq!(column, "missing");
                assert_eq!(available, vec!["id", "subject_id"]);
            }
            other => panic!("expected ColumnNotFound, got {other:?}"),
        }
    }

    #[test]
    fn display_marks_missing_cells() {
        let rec = cells(&[Some("3"), None]);
        assert_eq!(rec.to_string(), "3,<null>");
    }
}
