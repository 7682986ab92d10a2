use crate::domain::model::{InputRow, LoadSummary, OutputRecord};
use crate::utils::error::Result;
use std::path::Path;

/// Raw named settings, e.g. the process environment.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Typed settings the pipeline reads its paths from.
pub trait ConfigProvider {
    fn patron_file(&self) -> &Path;
    fn output_path(&self) -> &Path;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
    Critical,
}

/// Leveled message sink handed to every step of a run.
pub trait Reporter {
    fn report(&self, level: ReportLevel, message: &str);

    fn info(&self, message: &str) {
        self.report(ReportLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.report(ReportLevel::Warning, message);
    }

    fn critical(&self, message: &str) {
        self.report(ReportLevel::Critical, message);
    }
}

pub trait Pipeline {
    fn extract(&self, reporter: &dyn Reporter) -> Result<Vec<InputRow>>;
    fn transform(&self, rows: Vec<InputRow>, reporter: &dyn Reporter) -> Vec<OutputRecord>;
    fn load(&self, records: &[OutputRecord], reporter: &dyn Reporter) -> Result<LoadSummary>;
}
