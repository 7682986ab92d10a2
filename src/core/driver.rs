use crate::core::mapper::RecordMapper;
use crate::domain::model::{InputRow, OutputRecord};
use crate::domain::ports::Reporter;
use crate::utils::error::EtlError;
use std::path::Path;

/// Maps every row in order. An empty batch is reported as a warning, not an error.
pub fn run(rows: Vec<InputRow>, source: &Path, reporter: &dyn Reporter) -> Vec<OutputRecord> {
    if rows.is_empty() {
        let warning = EtlError::EmptyInput {
            path: source.to_path_buf(),
        };
        reporter.warn(&warning.to_string());
        return Vec::new();
    }

    reporter.info("Converting patron records to json...");
    let mapper = RecordMapper::new();
    rows.into_iter().map(|row| mapper.map(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ReportLevel;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<(ReportLevel, String)>>,
    }

    impl Reporter for RecordingReporter {
        fn report(&self, level: ReportLevel, message: &str) {
            self.messages.borrow_mut().push((level, message.to_string()));
        }
    }

    fn row(id: &str) -> InputRow {
        InputRow {
            id: id.to_string(),
            barcode: format!("B{}", id),
            last_name: "Last".to_string(),
            first_name: "First".to_string(),
            email_address: None,
            expiration_date: None,
        }
    }

    #[test]
    fn test_run_preserves_count_and_order() {
        let reporter = RecordingReporter::default();
        let rows = vec![row("3"), row("1"), row("2")];

        let records = run(rows, Path::new("patrons.csv"), &reporter);

        let ids: Vec<&str> = records.iter().map(|r| r.barcode.as_str()).collect();
        assert_eq!(ids, vec!["B3", "B1", "B2"]);
        assert!(reporter
            .messages
            .borrow()
            .iter()
            .all(|(level, _)| *level == ReportLevel::Info));
    }

    #[test]
    fn test_run_warns_on_empty_input() {
        let reporter = RecordingReporter::default();

        let records = run(Vec::new(), Path::new("patrons.csv"), &reporter);

        assert!(records.is_empty());
        let messages = reporter.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, ReportLevel::Warning);
        assert!(messages[0].1.contains("contains no records"));
    }
}
