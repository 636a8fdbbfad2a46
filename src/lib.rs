//! rowprune: drop CSV rows whose value in a given column is empty or missing.
//!
//! The work happens in three steps, each in its own module under [`data`]:
//! [`data::loader`] reads the whole file into a [`Dataset`],
//! [`data::filter`] removes the rows whose cell is missing or `""`, and
//! [`data::writer`] writes the survivors back out with the original header.
//!
//! ```no_run
//! let report = rowprune::remove_empty_rows(
//!     "lesson_plan_parts_2.csv",
//!     "lesson_plan_parts_valid.csv",
//!     "subject_id",
//! )?;
//! println!("kept {} of {} rows", report.kept, report.total);
//! # Ok::<(), rowprune::errors::FilterError>(())
//! ```

use std::path::Path;

pub mod cli;
pub mod config;
pub mod data;
pub mod errors;

pub use config::FilterConfig;
pub use data::filter::FilterReport;
pub use data::model::{Dataset, Record};
pub use errors::FilterError;

/// Read `input_path`, drop rows whose `column_name` cell is missing or empty,
/// and write the rest to `output_path`.
///
/// The column is resolved before the output is opened, so an unknown column
/// leaves `output_path` untouched.
pub fn remove_empty_rows(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    column_name: &str,
) -> errors::Result<FilterReport> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let dataset = data::loader::load_csv(input_path)?;
    let (kept, report) = data::filter::remove_empty(dataset, column_name)?;
    data::writer::write_csv(&kept, output_path)?;

    Ok(report)
}

/// Execute one filter run as described by `config`.
pub fn run(config: &FilterConfig) -> errors::Result<FilterReport> {
    config.validate()?;
    log::debug!("Running with {config:?}");
    remove_empty_rows(&config.input_path, &config.output_path, &config.column)
}
