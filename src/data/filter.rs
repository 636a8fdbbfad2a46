use std::fmt;

use crate::errors::Result;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// FilterReport: what a pass over the dataset removed
// ---------------------------------------------------------------------------

/// Row counts for one filter pass over `column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub column: String,
    pub total: usize,
    pub kept: usize,
    pub dropped: usize,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "removed {} of {} rows with empty '{}'",
            self.dropped, self.total, self.column
        )
    }
}

// ---------------------------------------------------------------------------
// Predicate application
// ---------------------------------------------------------------------------

/// Return indices of records whose `column` cell holds a value.
///
/// A record is kept when its cell is present and not the empty string.
/// Fails with `ColumnNotFound` when `column` is not in the header.
pub fn retained_indices(dataset: &Dataset, column: &str) -> Result<Vec<usize>> {
    let col = dataset.column_index(column)?;
    log::debug!("Filtering on column '{column}' (index {col})");

    Ok(dataset
        .records
        .iter()
        .enumerate()
        .filter(|(i, rec)| {
            let keep = rec.has_value(col);
            if !keep {
                log::trace!("Dropping row {i}: {rec}");
            }
            keep
        })
        .map(|(i, _)| i)
        .collect())
}

/// Drop every record whose `column` cell is missing or empty, keeping the
/// relative order of the rest. The header is left untouched.
pub fn remove_empty(dataset: Dataset, column: &str) -> Result<(Dataset, FilterReport)> {
    let retained = retained_indices(&dataset, column)?;
    let total = dataset.len();

    let mut mask = vec![false; total];
    for i in retained {
        mask[i] = true;
    }

    let Dataset { headers, records } = dataset;
    let kept: Vec<_> = records
        .into_iter()
        .zip(mask)
        .filter_map(|(rec, keep)| keep.then_some(rec))
        .collect();

    let report = FilterReport {
        column: column.to_string(),
        total,
        kept: kept.len(),
        dropped: total - kept.len(),
    };
    log::info!("Filter on '{column}': {report}");

    Ok((Dataset::new(headers, kept), report))
}
