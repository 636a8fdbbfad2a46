// src/cli.rs

use clap::Parser;

/// Drop CSV rows whose value in a given column is empty or missing.
///
/// rowprune loads INPUT fully into memory, keeps every row whose COLUMN cell
/// holds a non-empty value, and writes the kept rows to OUTPUT with the
/// original header and row order. Values such as "NA" or whitespace are kept;
/// only zero-length fields and fields a short row leaves out are removed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file to read. The first line must be the header.
    #[arg(default_value = "lesson_plan_parts_2.csv")]
    pub input_path: String,

    /// CSV file to write. Overwritten if it exists.
    #[arg(default_value = "lesson_plan_parts_valid.csv")]
    pub output_path: String,

    /// Header name of the column that must hold a value.
    #[arg(default_value = "subject_id")]
    pub column: String,
}
