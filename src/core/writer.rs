use crate::domain::model::OutputRecord;
use crate::utils::error::{EtlError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one JSON object per line, in input order, and returns the number
/// of lines written. The destination directory must already exist. Lines
/// written before a failure stay on disk.
pub fn write_ndjson(records: &[OutputRecord], destination: &Path) -> Result<usize> {
    let write_failure = |source: std::io::Error| EtlError::OutputWriteFailure {
        path: destination.to_path_buf(),
        source,
    };

    let file = File::create(destination).map_err(write_failure)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{}", line).map_err(write_failure)?;
    }
    writer.flush().map_err(write_failure)?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapper::RecordMapper;
    use crate::domain::model::InputRow;
    use tempfile::TempDir;

    fn record(id: &str) -> OutputRecord {
        RecordMapper::new().map(InputRow {
            id: id.to_string(),
            barcode: format!("B{}", id),
            last_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            email_address: None,
            expiration_date: None,
        })
    }

    #[test]
    fn test_writes_one_object_per_line() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("patrons.json");
        let records = vec![record("1"), record("2")];

        let written = write_ndjson(&records, &destination).unwrap();

        assert_eq!(written, 2);
        let content = std::fs::read_to_string(&destination).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(content.ends_with('\n'));
        let first: OutputRecord = serde_json::from_str(lines[0]).unwrap();
        let second: OutputRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first, records[0]);
        assert_eq!(second.username, "2@umass.edu");
    }

    #[test]
    fn test_zero_records_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("empty.json");

        let written = write_ndjson(&[], &destination).unwrap();

        assert_eq!(written, 0);
        assert!(destination.exists());
        assert_eq!(std::fs::read_to_string(&destination).unwrap(), "");
    }

    #[test]
    fn test_missing_destination_directory() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("no_such_dir").join("patrons.json");

        let err = write_ndjson(&[record("1")], &destination).unwrap_err();

        assert!(matches!(err, EtlError::OutputWriteFailure { ref path, .. } if *path == destination));
        assert!(!destination.exists());
    }
}
