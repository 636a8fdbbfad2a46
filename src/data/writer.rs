use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::{csv_error_with_path, io_error_with_path, Result};

use super::model::Dataset;

/// Write `dataset` to `path` as CSV, header first, no index column.
///
/// An existing file is truncated. Missing cells are written as zero-length
/// fields. A failure part way through may leave a truncated file behind.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    write_to(dataset, file, path)?;
    log::info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

/// Serialise `dataset` into any writer. `target` only labels errors.
pub fn write_to<W: Write>(dataset: &Dataset, output: W, target: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(output);

    writer
        .write_record(&dataset.headers)
        .map_err(|e| csv_error_with_path(e, target))?;

    for record in &dataset.records {
        writer
            .write_record(record.cells.iter().map(|c| c.as_deref().unwrap_or("")))
            .map_err(|e| csv_error_with_path(e, target))?;
    }

    writer.flush().map_err(|e| io_error_with_path(e, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;
    use crate::data::model::Record;

    fn render(ds: &Dataset) -> String {
        let mut buf = Vec::new();
        write_to(ds, &mut buf, Path::new("mem.csv")).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_only_dataset_writes_header_line() {
        let ds = Dataset::new(vec!["id".into(), "subject_id".into()], vec![]);
        assert_eq!(render(&ds), "id,subject_id\n");
    }

    #[test]
    fn missing_cells_become_empty_fields() {
        let ds = Dataset::new(
            vec!["id".into(), "key".into(), "subject_id".into()],
            vec![Record::new(vec![Some("1".into()), None, Some("5".into())])],
        );
        assert_eq!(render(&ds), "id,key,subject_id\n1,,5\n");
    }

    #[test]
    fn values_needing_quotes_survive_a_reload() {
        let ds = Dataset::new(
            vec!["id".into(), "value_text".into()],
            vec![Record::new(vec![
                Some("1".into()),
                Some("says \"hi\", then\nleaves".into()),
            ])],
        );
        let text = render(&ds);
        let back = read_csv(text.as_bytes(), Path::new("mem.csv")).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn write_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        std::fs::write(&out, "stale,content\n1,2\n3,4\n").unwrap();

        let ds = Dataset::new(
            vec!["id".into()],
            vec![Record::new(vec![Some("9".into())])],
        );
        write_csv(&ds, &out).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "id\n9\n");
    }

    #[test]
    fn write_csv_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no_such_dir").join("out.csv");
        let ds = Dataset::new(vec!["id".into()], vec![]);
        assert!(matches!(
            write_csv(&ds, &out),
            Err(crate::errors::FilterError::Io { .. })
        ));
    }
}
