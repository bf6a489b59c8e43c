use crate::error::{Result, TabularError};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read a comma-delimited file. The first record is the header; ragged rows
/// are kept as-is and evened out later by the normalizer.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| TabularError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = reader.records();
    let header: Vec<String> = match records.next() {
        Some(record) => to_cells(record, path)?,
        None => return Err(TabularError::EmptyInput(path.to_path_buf())),
    };

    let mut rows = Vec::new();
    for record in records {
        rows.push(to_cells(record, path)?);
    }

    Ok(Table { header, rows })
}

fn to_cells(
    record: std::result::Result<csv::StringRecord, csv::Error>,
    path: &Path,
) -> Result<Vec<String>> {
    let record = record.map_err(|source| TabularError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(record.iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::read_table;
    use crate::error::TabularError;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(contents: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("contacts.csv");
        fs::write(&path, contents).expect("write input");
        (temp, path)
    }

    #[test]
    fn read_table_splits_header_and_rows() {
        let (_temp, path) = write_input("Name,Phone\nAda,555\nGrace,666\n");
        let table = read_table(&path).expect("read");
        assert_eq!(table.header, vec!["Name", "Phone"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Ada", "555"]);
    }

    #[test]
    fn read_table_keeps_ragged_rows() {
        let (_temp, path) = write_input("name,phone,email\nAda,555\nGrace,666,g@x.org,extra\n");
        let table = read_table(&path).expect("read");
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn read_table_rejects_empty_input() {
        let (_temp, path) = write_input("");
        let err = read_table(&path).unwrap_err();
        assert!(matches!(err, TabularError::EmptyInput(_)));
    }

    #[test]
    fn read_table_reports_missing_file() {
        let temp = TempDir::new().expect("tempdir");
        let err = read_table(&temp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, TabularError::Read { .. }));
    }
}
