//! Record sets: the header-keyed rows of an e-form export.

use crate::error::{IngestError, IngestResult};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One row of the export, column name to raw value, in column order.
pub type Record = IndexMap<String, String>;

const UTF8_BOM: char = '\u{feff}';

/// An ordered sequence of rows.
///
/// Column iteration order comes from the first row. Rows missing one of those columns
/// read as an empty value for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl RecordSet {
    pub fn from_rows(rows: Vec<Record>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    /// Load an export from a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] if the file is missing or malformed, if a header cell is
    /// empty or repeated, or if there are no data rows.
    pub fn from_csv_path(path: &Path) -> IngestResult<Self> {
        if !path.is_file() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| IngestError::Csv {
                path: path.to_path_buf(),
                source: e,
            })?;

        read_csv(reader, path)
    }

    /// Load an export from any CSV byte stream with a header row.
    ///
    /// # Errors
    ///
    /// See [`RecordSet::from_csv_path`].
    pub fn from_csv_reader<R: Read>(input: R) -> IngestResult<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);

        read_csv(reader, &PathBuf::from("<input>"))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of `column` across every row, empty for rows that lack it.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows.iter().map(move |row| value(row, column))
    }
}

/// The raw value of `column` in `row`, or `""` when absent.
pub fn value<'a>(row: &'a Record, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or("")
}

fn read_csv<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> IngestResult<RecordSet> {
    let csv_error = |e: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source: e,
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(UTF8_BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    if let Some(position) = headers.iter().position(|h| h.trim().is_empty()) {
        return Err(IngestError::EmptyColumnName(position));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for header in &headers {
        if !seen.insert(header) {
            return Err(IngestError::DuplicateColumnName(header.clone()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let row: Record = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(IngestError::Empty);
    }

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "loaded e-form export"
    );

    Ok(RecordSet {
        columns: headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXPORT: &str = "\
demographicNo,age,notes,fdid,efmfid,dateCreated
1,34,ok,f1,e1,2024-01-01
1,40,bad,f2,e2,2024-01-02
";

    #[test]
    fn reads_rows_in_header_order() {
        let records = RecordSet::from_csv_reader(EXPORT.as_bytes()).expect("parse csv");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records.columns(),
            ["demographicNo", "age", "notes", "fdid", "efmfid", "dateCreated"]
        );
        let first_row_keys: Vec<&str> = records.rows()[0].keys().map(String::as_str).collect();
        assert_eq!(first_row_keys, records.columns());
        assert_eq!(value(&records.rows()[1], "notes"), "bad");
    }

    #[test]
    fn strips_utf8_bom_from_first_header() {
        let input = format!("{UTF8_BOM}{EXPORT}");
        let records = RecordSet::from_csv_reader(input.as_bytes()).expect("parse csv");
        assert_eq!(records.columns()[0], "demographicNo");
        assert_eq!(value(&records.rows()[0], "demographicNo"), "1");
    }

    #[test]
    fn header_only_export_is_empty() {
        let err = RecordSet::from_csv_reader("a,b\n".as_bytes()).expect_err("no rows");
        assert!(matches!(err, IngestError::Empty));
    }

    #[test]
    fn rejects_empty_column_name() {
        let err = RecordSet::from_csv_reader("a,,c\n1,2,3\n".as_bytes())
            .expect_err("empty header");
        assert!(matches!(err, IngestError::EmptyColumnName(1)));
    }

    #[test]
    fn rejects_repeated_column_name() {
        let err = RecordSet::from_csv_reader("a,b,a\n1,2,3\n".as_bytes())
            .expect_err("repeated header");
        assert!(matches!(err, IngestError::DuplicateColumnName(ref name) if name == "a"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = RecordSet::from_csv_reader("a,b\n1,2,3\n".as_bytes()).expect_err("ragged");
        assert!(matches!(err, IngestError::Csv { .. }));
    }

    #[test]
    fn reads_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(EXPORT.as_bytes()).expect("write export");

        let records = RecordSet::from_csv_path(file.path()).expect("parse csv");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.csv");
        let err = RecordSet::from_csv_path(&path).expect_err("missing file");
        assert!(matches!(err, IngestError::FileNotFound { path: p } if p == path));
    }

    #[test]
    fn absent_columns_read_as_empty() {
        let mut first = Record::new();
        first.insert("a".into(), "1".into());
        first.insert("b".into(), "2".into());
        let mut second = Record::new();
        second.insert("a".into(), "3".into());

        let records = RecordSet::from_rows(vec![first, second]);
        assert_eq!(records.columns(), ["a", "b"]);
        assert_eq!(records.column_values("b").collect::<Vec<_>>(), ["2", ""]);
    }
}
