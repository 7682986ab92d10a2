use crate::domain::model::{InputRow, REQUIRED_COLUMNS};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::validate_required_columns;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the whole patron file into memory, then decodes it.
pub fn read_patron_file(path: &Path) -> Result<Vec<InputRow>> {
    let data = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EtlError::InputFileNotFound {
            path: path.to_path_buf(),
        },
        _ => EtlError::IoError(e),
    })?;

    parse_patron_csv(&data, path)
}

/// Decodes comma-delimited patron rows. Every cell stays a string; blank or
/// missing trailing optional cells decode as absent.
pub fn parse_patron_csv(data: &[u8], path: &Path) -> Result<Vec<InputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    validate_required_columns(path, &headers, &REQUIRED_COLUMNS)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: InputRow = result?;
        rows.push(row);
    }

    tracing::debug!("Decoded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PATH: &str = "patrons.csv";

    #[test]
    fn test_parse_full_rows() {
        let data = "ID,Barcode,Last_Name,First_Name,Email_Address,Expiration_Date\n\
                    12345,B1,Doe,Jane,jane@x.edu,2025-01-01\n\
                    00678,B2,Roe,Rick,,\n";

        let rows = parse_patron_csv(data.as_bytes(), Path::new(PATH)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].email_address.as_deref(), Some("jane@x.edu"));
        assert_eq!(rows[0].expiration_date.as_deref(), Some("2025-01-01"));
        // No numeric coercion: leading zeros survive.
        assert_eq!(rows[1].id, "00678");
        assert_eq!(rows[1].email_address, None);
        assert_eq!(rows[1].expiration_date, None);
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let data = "First_Name,Last_Name,Barcode,ID,Program\nJane,Doe,B1,12345,REU\n";

        let rows = parse_patron_csv(data.as_bytes(), Path::new(PATH)).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "12345");
        assert_eq!(rows[0].first_name, "Jane");
        assert!(rows[0].email_address.is_none());
        assert!(rows[0].expiration_date.is_none());
    }

    #[test]
    fn test_short_row_drops_trailing_optional_cells() {
        let data = "ID,Barcode,Last_Name,First_Name,Email_Address,Expiration_Date\n\
                    12345,B1,Doe,Jane\n\
                    12346,B2,Doe,John,john@x.edu\n";

        let rows = parse_patron_csv(data.as_bytes(), Path::new(PATH)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].first_name, "Jane");
        assert!(rows[0].email_address.is_none());
        assert!(rows[0].expiration_date.is_none());
        assert_eq!(rows[1].email_address.as_deref(), Some("john@x.edu"));
        assert!(rows[1].expiration_date.is_none());
    }

    #[test]
    fn test_short_row_missing_required_cell_fails() {
        let data = "ID,Barcode,Last_Name,First_Name\n12345,B1,Doe\n";

        let err = parse_patron_csv(data.as_bytes(), Path::new(PATH)).unwrap_err();

        assert!(matches!(err, EtlError::CsvError(_)));
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let data = "ID,Barcode,Last_Name,First_Name,Email_Address,Expiration_Date\n";
        let rows = parse_patron_csv(data.as_bytes(), Path::new(PATH)).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_required_column() {
        let data = "ID,Last_Name,First_Name\n1,Doe,Jane\n";

        let err = parse_patron_csv(data.as_bytes(), Path::new(PATH)).unwrap_err();

        assert!(matches!(err, EtlError::MissingColumn { ref column, .. } if column == "Barcode"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        let err = read_patron_file(&path).unwrap_err();

        assert!(matches!(err, EtlError::InputFileNotFound { path: ref p } if *p == path));
    }
}
