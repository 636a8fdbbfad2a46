use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{csv_error_with_path, io_error_with_path, FilterError, Result};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a CSV file into memory.
///
/// Layout: the first line is the header, every following line is a record.
/// * A zero-length field loads as `Some("")`.
/// * Trailing fields a short row leaves out load as `None`.
/// * A row with more fields than the header is rejected.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
    let dataset = read_csv(file, path)?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.headers.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV from any reader. `source` only labels errors.
pub fn read_csv<R: Read>(input: R, source: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error_with_path(e, source))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(FilterError::MissingHeader {
            path: source.display().to_string(),
        });
    }
    log::debug!("Header of {}: {:?}", source.display(), headers);

    let width = headers.len();
    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| csv_error_with_path(e, source))?;

        if record.len() > width {
            return Err(FilterError::RaggedRecord {
                path: source.display().to_string(),
                row: row_no,
                expected: width,
                found: record.len(),
            });
        }

        let mut cells: Vec<Option<String>> = record.iter().map(|v| Some(v.to_string())).collect();
        if cells.len() < width {
            log::debug!(
                "Row {row_no}: {} of {width} fields present, padding with missing values",
                cells.len()
            );
            cells.resize(width, None);
        }

        records.push(Record::new(cells));
    }

    Ok(Dataset::new(headers, records))
}
